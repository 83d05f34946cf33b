//! Domain & parameter models for student record operations
//!
//! Defines the student domain model, the create/update parameter models, the
//! validation rules for the request DTOs they are built from, and conversions
//! from entity and into DTOs.

use uuid::Uuid;

use crate::{
    model::{
        api::FieldViolationDto,
        mahasiswa::{CreateMahasiswaDto, MahasiswaDto, UpdateMahasiswaDto},
    },
    server::util::validate::{require_min_length, require_not_empty, Validate},
};

/// Minimum number of characters in a student name.
pub const NAMA_MIN_LENGTH: usize = 3;

/// The student domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mahasiswa {
    pub id: Uuid,
    pub nim: String,
    pub nama: String,
    pub prodi: String,
    pub fakultas: String,
    pub is_active: bool,
}

impl Mahasiswa {
    /// Converts an entity model to the student domain model
    pub fn from_entity(entity: entity::mahasiswa::Model) -> Self {
        Self {
            id: entity.id,
            nim: entity.nim,
            nama: entity.nama,
            prodi: entity.prodi,
            fakultas: entity.fakultas,
            is_active: entity.is_active,
        }
    }

    pub fn into_dto(self) -> MahasiswaDto {
        MahasiswaDto {
            id: self.id,
            nim: self.nim,
            nama: self.nama,
            prodi: self.prodi,
            fakultas: self.fakultas,
            is_active: self.is_active,
        }
    }
}

/// Parameters for creating a new student record
///
/// The id and the active flag are not caller-controlled; the repository assigns a
/// fresh UUID and marks every new record active.
#[derive(Debug, Clone)]
pub struct CreateMahasiswaParam {
    pub nim: String,
    pub nama: String,
    pub prodi: String,
    pub fakultas: String,
}

impl From<CreateMahasiswaDto> for CreateMahasiswaParam {
    fn from(dto: CreateMahasiswaDto) -> Self {
        Self {
            nim: dto.nim,
            nama: dto.nama,
            prodi: dto.prodi,
            fakultas: dto.fakultas,
        }
    }
}

/// Parameters for a partial update of a student record
///
/// `None` leaves the stored column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateMahasiswaParam {
    pub nim: Option<String>,
    pub nama: Option<String>,
    pub prodi: Option<String>,
    pub fakultas: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateMahasiswaParam {
    /// True when no field was supplied and the update is a no-op.
    pub fn is_empty(&self) -> bool {
        self.nim.is_none()
            && self.nama.is_none()
            && self.prodi.is_none()
            && self.fakultas.is_none()
            && self.is_active.is_none()
    }
}

impl From<UpdateMahasiswaDto> for UpdateMahasiswaParam {
    fn from(dto: UpdateMahasiswaDto) -> Self {
        Self {
            nim: dto.nim,
            nama: dto.nama,
            prodi: dto.prodi,
            fakultas: dto.fakultas,
            is_active: dto.is_active,
        }
    }
}

impl Validate for CreateMahasiswaDto {
    fn violations(&self) -> Vec<FieldViolationDto> {
        let mut violations = Vec::new();

        require_not_empty("nim", &self.nim, &mut violations);
        require_not_empty("nama", &self.nama, &mut violations);
        require_min_length("nama", &self.nama, NAMA_MIN_LENGTH, &mut violations);
        require_not_empty("prodi", &self.prodi, &mut violations);
        require_not_empty("fakultas", &self.fakultas, &mut violations);

        violations
    }
}

impl Validate for UpdateMahasiswaDto {
    fn violations(&self) -> Vec<FieldViolationDto> {
        let mut violations = Vec::new();

        if let Some(nim) = &self.nim {
            require_not_empty("nim", nim, &mut violations);
        }
        if let Some(nama) = &self.nama {
            require_not_empty("nama", nama, &mut violations);
            require_min_length("nama", nama, NAMA_MIN_LENGTH, &mut violations);
        }
        if let Some(prodi) = &self.prodi {
            require_not_empty("prodi", prodi, &mut violations);
        }
        if let Some(fakultas) = &self.fakultas {
            require_not_empty("fakultas", fakultas, &mut violations);
        }

        violations
    }
}
