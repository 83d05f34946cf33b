//! Mahasiswa Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the mahasiswa
//! API. This crate offers a builder pattern for creating test contexts with in-memory SQLite
//! databases, plus factories and fixtures for student records.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders that insert student records into the test database
//! - **fixture**: In-memory entity models that never touch the database
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Mahasiswa;
//!
//! #[tokio::test]
//! async fn test_mahasiswa_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Mahasiswa)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
