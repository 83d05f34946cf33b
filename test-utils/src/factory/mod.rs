//! Factory methods for creating test data.
//!
//! Factories insert entities into the test database with sensible defaults, reducing
//! boilerplate in tests. Each entity has a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let mahasiswa = factory::create_mahasiswa(&db).await?;
//!
//!     // Create with custom values
//!     let inactive = factory::mahasiswa::MahasiswaFactory::new(&db)
//!         .nim("2021001")
//!         .active(false)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod helpers;
pub mod mahasiswa;

pub use mahasiswa::{create_mahasiswa, create_many_mahasiswa};
