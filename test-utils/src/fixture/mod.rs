//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for
//! unit tests of conversions and as the default values behind the factories.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let mahasiswa = fixture::mahasiswa::entity();
//!
//! let inactive = fixture::mahasiswa::entity_builder()
//!     .active(false)
//!     .build();
//! ```

pub mod mahasiswa;

pub use mahasiswa::{entity as mahasiswa_entity, entity_builder as mahasiswa_entity_builder};
