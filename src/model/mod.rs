//! Data transfer objects shared by the HTTP boundary.
//!
//! These types define the JSON wire format of the API. Server-side domain models
//! live in `server::model` and are converted to and from these DTOs at the
//! controller boundary.

pub mod api;
pub mod mahasiswa;
