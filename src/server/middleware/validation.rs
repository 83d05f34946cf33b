use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::server::{
    error::{validation::ValidationError, AppError},
    util::validate::Validate,
};

/// JSON body extractor that rejects invalid input before the handler runs.
///
/// Malformed JSON, wrongly typed fields and unknown properties become
/// `ValidationError::MalformedBody`; rule violations reported by the body's
/// [`Validate`] impl become `ValidationError::InvalidFields`. Both answer 400.
/// This includes a missing JSON content type and an oversized body, which axum
/// alone would answer with 415 and 413.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ValidationError::MalformedBody(rejection.body_text()))?;

        value.validate()?;

        Ok(Self(value))
    }
}
