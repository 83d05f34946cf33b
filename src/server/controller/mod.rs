//! HTTP request handlers.
//!
//! Controllers extract and validate request input, convert DTOs into parameter
//! models, call the service layer and convert the resulting domain models back into
//! DTOs wrapped in the response envelope.

pub mod health;
pub mod mahasiswa;
