//! Database repository layer.
//!
//! Repositories handle the CRUD operations against the database. They use SeaORM
//! entity models internally and return domain models to keep the data layer
//! separate from business logic.

pub mod mahasiswa;
