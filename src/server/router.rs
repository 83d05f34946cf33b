use axum::{
    http::{Method, Uri},
    Router,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        health::{self, HEALTH_TAG},
        mahasiswa::{self, MAHASISWA_TAG},
    },
    error::AppError,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mahasiswa API",
        description = "CRUD API for student records"
    ),
    tags(
        (name = MAHASISWA_TAG, description = "Student record management"),
        (name = HEALTH_TAG, description = "Liveness probe")
    )
)]
pub struct ApiDoc;

/// Builds the API routes and mounts Swagger UI for the generated OpenAPI document.
///
/// Unknown paths and unsupported methods answer with the JSON error body instead
/// of axum's empty default responses.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            mahasiswa::create_mahasiswa,
            mahasiswa::get_all_mahasiswa
        ))
        .routes(routes!(
            mahasiswa::get_mahasiswa,
            mahasiswa::update_mahasiswa,
            mahasiswa::delete_mahasiswa
        ))
        .routes(routes!(health::health))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
}

async fn route_not_found(method: Method, uri: Uri) -> AppError {
    AppError::NotFound(format!("Cannot {} {}", method, uri.path()))
}

async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::MethodNotAllowed(format!("Cannot {} {}", method, uri.path()))
}
