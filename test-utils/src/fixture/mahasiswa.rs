//! Student record fixtures for creating in-memory test data.

use entity::mahasiswa;
use uuid::Uuid;

/// Default test registration number.
pub const DEFAULT_NIM: &str = "123";

/// Default test student name.
pub const DEFAULT_NAMA: &str = "Budi Santoso";

/// Default test study program.
pub const DEFAULT_PRODI: &str = "TI";

/// Default test faculty.
pub const DEFAULT_FAKULTAS: &str = "Teknik";

/// Creates a student entity model with default values.
///
/// # Default Values
/// - id: nil UUID
/// - nim: `"123"`
/// - nama: `"Budi Santoso"`
/// - prodi: `"TI"`
/// - fakultas: `"Teknik"`
/// - is_active: `true`
pub fn entity() -> mahasiswa::Model {
    entity_builder().build()
}

/// Creates a student entity builder for customization.
pub fn entity_builder() -> MahasiswaEntityBuilder {
    MahasiswaEntityBuilder::default()
}

/// Builder for creating customized student entity models.
pub struct MahasiswaEntityBuilder {
    id: Uuid,
    nim: String,
    nama: String,
    prodi: String,
    fakultas: String,
    is_active: bool,
}

impl Default for MahasiswaEntityBuilder {
    fn default() -> Self {
        Self {
            id: Uuid::nil(),
            nim: DEFAULT_NIM.to_string(),
            nama: DEFAULT_NAMA.to_string(),
            prodi: DEFAULT_PRODI.to_string(),
            fakultas: DEFAULT_FAKULTAS.to_string(),
            is_active: true,
        }
    }
}

impl MahasiswaEntityBuilder {
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn nim(mut self, nim: impl Into<String>) -> Self {
        self.nim = nim.into();
        self
    }

    pub fn nama(mut self, nama: impl Into<String>) -> Self {
        self.nama = nama.into();
        self
    }

    pub fn prodi(mut self, prodi: impl Into<String>) -> Self {
        self.prodi = prodi.into();
        self
    }

    pub fn fakultas(mut self, fakultas: impl Into<String>) -> Self {
        self.fakultas = fakultas.into();
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and returns the student entity model.
    pub fn build(self) -> mahasiswa::Model {
        mahasiswa::Model {
            id: self.id,
            nim: self.nim,
            nama: self.nama,
            prodi: self.prodi,
            fakultas: self.fakultas,
            is_active: self.is_active,
        }
    }
}
