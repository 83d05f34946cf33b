use axum::http::StatusCode;
use thiserror::Error;

use crate::model::api::FieldViolationDto;

/// Request body rejected by the boundary before reaching a service.
///
/// Always results in a 400 Bad Request response.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// The body parsed but one or more fields broke a validation rule.
    ///
    /// Every violation found is reported, not only the first.
    #[error("Request validation failed")]
    InvalidFields(Vec<FieldViolationDto>),

    /// The body is not valid JSON, has a wrongly typed field, or carries a
    /// property the endpoint does not accept.
    #[error("{0}")]
    MalformedBody(String),
}

impl ValidationError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}
