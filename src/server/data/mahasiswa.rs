//! Student record repository for database operations.
//!
//! Provides the `MahasiswaRepository`, the only code that touches the `mahasiswa`
//! table. It inserts, scans, looks up, partially updates and deletes rows, and
//! converts entity models into domain models so entities never leak into the
//! service or controller layers.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};
use uuid::Uuid;

use crate::server::model::mahasiswa::{CreateMahasiswaParam, Mahasiswa, UpdateMahasiswaParam};

/// Repository providing database operations for student records.
pub struct MahasiswaRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MahasiswaRepository<'a> {
    /// Creates a new MahasiswaRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `MahasiswaRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new student record.
    ///
    /// Assigns a freshly generated UUID and marks the record active.
    ///
    /// # Arguments
    /// - `param` - Create parameters containing nim, nama, prodi and fakultas
    ///
    /// # Returns
    /// - `Ok(Mahasiswa)` - The persisted record including its generated ID
    /// - `Err(DbErr)` - Database error during insert, including a unique violation on `nim`
    pub async fn create(&self, param: CreateMahasiswaParam) -> Result<Mahasiswa, DbErr> {
        let entity = entity::mahasiswa::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            nim: ActiveValue::Set(param.nim),
            nama: ActiveValue::Set(param.nama),
            prodi: ActiveValue::Set(param.prodi),
            fakultas: ActiveValue::Set(param.fakultas),
            is_active: ActiveValue::Set(true),
        }
        .insert(self.db)
        .await?;

        Ok(Mahasiswa::from_entity(entity))
    }

    /// Returns every student record in store order.
    pub async fn find_all(&self) -> Result<Vec<Mahasiswa>, DbErr> {
        let entities = entity::prelude::Mahasiswa::find().all(self.db).await?;

        Ok(entities.into_iter().map(Mahasiswa::from_entity).collect())
    }

    /// Finds a student record by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Mahasiswa))` - The record exists
    /// - `Ok(None)` - No record has this ID
    /// - `Err(DbErr)` - Database error during lookup
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Mahasiswa>, DbErr> {
        let entity = entity::prelude::Mahasiswa::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Mahasiswa::from_entity))
    }

    /// Writes only the supplied fields of a student record.
    ///
    /// Columns whose parameter is `None` are left out of the UPDATE statement entirely.
    /// An empty parameter set issues no statement.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows written (0 when the ID does not exist or nothing was supplied)
    /// - `Err(DbErr)` - Database error during update, including a unique violation on `nim`
    pub async fn update(&self, id: Uuid, param: UpdateMahasiswaParam) -> Result<u64, DbErr> {
        if param.is_empty() {
            return Ok(0);
        }

        let active_model = entity::mahasiswa::ActiveModel {
            id: ActiveValue::NotSet,
            nim: set_if_some(param.nim),
            nama: set_if_some(param.nama),
            prodi: set_if_some(param.prodi),
            fakultas: set_if_some(param.fakultas),
            is_active: set_if_some(param.is_active),
        };

        let result = entity::prelude::Mahasiswa::update_many()
            .set(active_model)
            .filter(entity::mahasiswa::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes the student record with the provided ID.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted (0 when the ID does not exist)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::Mahasiswa::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

fn set_if_some<T>(value: Option<T>) -> ActiveValue<T>
where
    T: Into<sea_orm::Value>,
{
    match value {
        Some(value) => ActiveValue::Set(value),
        None => ActiveValue::NotSet,
    }
}

#[cfg(test)]
#[path = "test/mahasiswa/mod.rs"]
mod test;
