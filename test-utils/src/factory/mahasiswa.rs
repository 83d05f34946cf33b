//! Mahasiswa factory for creating test student records.
//!
//! Provides a builder for inserting student records with sensible defaults. Each
//! default record gets a unique `nim` so several can coexist in one test database.

use crate::{factory::helpers::next_id, fixture::mahasiswa as defaults};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test student records with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::mahasiswa::MahasiswaFactory;
///
/// let mahasiswa = MahasiswaFactory::new(&db)
///     .nama("Siti Aminah")
///     .prodi("Sistem Informasi")
///     .build()
///     .await?;
/// ```
pub struct MahasiswaFactory<'a> {
    db: &'a DatabaseConnection,
    nim: String,
    nama: String,
    prodi: String,
    fakultas: String,
    is_active: bool,
}

impl<'a> MahasiswaFactory<'a> {
    /// Creates a new MahasiswaFactory with default values.
    ///
    /// Defaults:
    /// - nim: `"NIM{id}"` where id is auto-incremented
    /// - nama, prodi, fakultas: the fixture defaults
    /// - is_active: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `MahasiswaFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            nim: format!("NIM{:06}", next_id()),
            nama: defaults::DEFAULT_NAMA.to_string(),
            prodi: defaults::DEFAULT_PRODI.to_string(),
            fakultas: defaults::DEFAULT_FAKULTAS.to_string(),
            is_active: true,
        }
    }

    /// Sets the student registration number.
    pub fn nim(mut self, nim: impl Into<String>) -> Self {
        self.nim = nim.into();
        self
    }

    /// Sets the student name.
    pub fn nama(mut self, nama: impl Into<String>) -> Self {
        self.nama = nama.into();
        self
    }

    /// Sets the study program.
    pub fn prodi(mut self, prodi: impl Into<String>) -> Self {
        self.prodi = prodi.into();
        self
    }

    /// Sets the faculty.
    pub fn fakultas(mut self, fakultas: impl Into<String>) -> Self {
        self.fakultas = fakultas.into();
        self
    }

    /// Sets whether the student is active.
    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the student record into the database.
    ///
    /// # Returns
    /// - `Ok(entity::mahasiswa::Model)` - Created student entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::mahasiswa::Model, DbErr> {
        entity::mahasiswa::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            nim: ActiveValue::Set(self.nim),
            nama: ActiveValue::Set(self.nama),
            prodi: ActiveValue::Set(self.prodi),
            fakultas: ActiveValue::Set(self.fakultas),
            is_active: ActiveValue::Set(self.is_active),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student record with default values.
///
/// Shorthand for `MahasiswaFactory::new(db).build().await`.
pub async fn create_mahasiswa(db: &DatabaseConnection) -> Result<entity::mahasiswa::Model, DbErr> {
    MahasiswaFactory::new(db).build().await
}

/// Creates `count` student records with default values and unique `nim`s.
///
/// # Returns
/// - `Ok(Vec<entity::mahasiswa::Model>)` - Created entities in insertion order
/// - `Err(DbErr)` - Database error during insert
pub async fn create_many_mahasiswa(
    db: &DatabaseConnection,
    count: usize,
) -> Result<Vec<entity::mahasiswa::Model>, DbErr> {
    let mut created = Vec::with_capacity(count);
    for _ in 0..count {
        created.push(create_mahasiswa(db).await?);
    }

    Ok(created)
}
