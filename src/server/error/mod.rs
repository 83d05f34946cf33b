//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod config;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::{ErrorDto, FieldViolationDto},
    server::error::{config::ConfigError, validation::ValidationError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. `NotFound` and `Conflict` are the only
/// conditions raised by the service layer itself; database errors pass through
/// untouched and end up as 500 responses.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Socket bind or serve failure at startup.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Request body rejected before reaching a service.
    ///
    /// Results in 400 Bad Request listing every field violation.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Write rejected by a uniqueness constraint.
    ///
    /// Results in 409 Conflict with the provided error message.
    #[error("{0}")]
    Conflict(String),

    /// Route exists but does not accept the request method.
    ///
    /// Results in 405 Method Not Allowed with the provided error message.
    #[error("{0}")]
    MethodNotAllowed(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `ValidationErr`
/// - 404 Not Found - For `NotFound`
/// - 405 Method Not Allowed - For `MethodNotAllowed`
/// - 409 Conflict - For `Conflict`
/// - 500 Internal Server Error - For all other error types (DbErr, IoErr, ConfigErr)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, msg, Vec::new()),
            Self::Conflict(msg) => error_response(StatusCode::CONFLICT, msg, Vec::new()),
            Self::MethodNotAllowed(msg) => {
                error_response(StatusCode::METHOD_NOT_ALLOWED, msg, Vec::new())
            }
            Self::ValidationErr(err) => {
                let status = err.status_code();
                match err {
                    ValidationError::InvalidFields(violations) => {
                        let message = violations
                            .iter()
                            .map(|v| v.message.as_str())
                            .collect::<Vec<_>>()
                            .join("; ");
                        error_response(status, message, violations)
                    }
                    ValidationError::MalformedBody(msg) => error_response(status, msg, Vec::new()),
                }
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

fn error_response(status: StatusCode, message: String, violations: Vec<FieldViolationDto>) -> Response {
    (
        status,
        Json(ErrorDto {
            success: false,
            status_code: status.as_u16(),
            error: status.canonical_reason().unwrap_or_default().to_string(),
            message,
            violations,
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
            Vec::new(),
        )
    }
}
