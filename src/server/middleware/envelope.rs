use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::model::api::ApiResponse;

/// Successful handler output, serialized inside the uniform response envelope.
///
/// The status code is written both to the HTTP response and to the `statusCode`
/// field of the body.
pub struct Envelope<T> {
    status: StatusCode,
    data: T,
}

impl<T> Envelope<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        Self { status, data }
    }

    pub fn ok(data: T) -> Self {
        Self::new(StatusCode::OK, data)
    }

    pub fn created(data: T) -> Self {
        Self::new(StatusCode::CREATED, data)
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ApiResponse {
                success: true,
                status_code: self.status.as_u16(),
                data: self.data,
            }),
        )
            .into_response()
    }
}
