//! Student record lifecycle service.
//!
//! Owns the business rules of the API: a record must exist before it can be updated
//! or deleted, absence is reported as `AppError::NotFound` carrying the requested ID,
//! and a write that collides with an existing `nim` is reported as
//! `AppError::Conflict`. Every other database error is passed through unchanged.

use sea_orm::{DatabaseConnection, DbErr, SqlErr};
use uuid::Uuid;

use crate::{
    model::api::MessageDto,
    server::{
        data::mahasiswa::MahasiswaRepository,
        error::AppError,
        model::mahasiswa::{CreateMahasiswaParam, Mahasiswa, UpdateMahasiswaParam},
    },
};

/// Acknowledgment returned after a record is deleted.
pub const DELETED_MESSAGE: &str = "Berhasil dihapus";

pub struct MahasiswaService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MahasiswaService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new active student record with a generated ID
    pub async fn create(&self, param: CreateMahasiswaParam) -> Result<Mahasiswa, AppError> {
        let repo = MahasiswaRepository::new(self.db);
        let nim = param.nim.clone();

        let mahasiswa = repo
            .create(param)
            .await
            .map_err(|err| conflict_on_duplicate_nim(err, &nim))?;

        tracing::info!("Created mahasiswa {} with nim {}", mahasiswa.id, mahasiswa.nim);

        Ok(mahasiswa)
    }

    /// Gets every student record
    pub async fn find_all(&self) -> Result<Vec<Mahasiswa>, AppError> {
        let repo = MahasiswaRepository::new(self.db);

        Ok(repo.find_all().await?)
    }

    /// Gets a student record by ID
    ///
    /// An ID that is not a valid UUID can never match a record, so it is reported
    /// as not found rather than as a malformed request.
    pub async fn find_one(&self, id: &str) -> Result<Mahasiswa, AppError> {
        let repo = MahasiswaRepository::new(self.db);

        let Some(uuid) = parse_id(id) else {
            return Err(not_found(id));
        };

        repo.find_by_id(uuid).await?.ok_or_else(|| not_found(id))
    }

    /// Applies a partial update and returns the record as stored afterwards
    pub async fn update(&self, id: &str, param: UpdateMahasiswaParam) -> Result<Mahasiswa, AppError> {
        let repo = MahasiswaRepository::new(self.db);

        let existing = self.find_one(id).await?;

        let nim = param.nim.clone().unwrap_or_else(|| existing.nim.clone());
        repo.update(existing.id, param)
            .await
            .map_err(|err| conflict_on_duplicate_nim(err, &nim))?;

        self.find_one(id).await
    }

    /// Deletes a student record
    pub async fn remove(&self, id: &str) -> Result<MessageDto, AppError> {
        let repo = MahasiswaRepository::new(self.db);

        let Some(uuid) = parse_id(id) else {
            return Err(not_found(id));
        };

        if repo.delete(uuid).await? == 0 {
            return Err(not_found(id));
        }

        tracing::info!("Deleted mahasiswa {}", uuid);

        Ok(MessageDto {
            message: DELETED_MESSAGE.to_string(),
        })
    }
}

fn parse_id(id: &str) -> Option<Uuid> {
    Uuid::parse_str(id).ok()
}

fn not_found(id: &str) -> AppError {
    AppError::NotFound(format!("ID {} tidak ditemukan", id))
}

fn conflict_on_duplicate_nim(err: DbErr, nim: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::Conflict(format!("NIM {} sudah terdaftar", nim))
        }
        _ => AppError::DbErr(err),
    }
}

#[cfg(test)]
#[path = "test/mahasiswa/mod.rs"]
mod test;
