//! SeaORM entities for the mahasiswa database.

pub mod prelude;

pub mod mahasiswa;
