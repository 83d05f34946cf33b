use crate::{
    model::api::{ApiResponse, HealthDto},
    server::middleware::envelope::Envelope,
};

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Liveness probe.
///
/// Answers without touching the database so it reports on the process alone.
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is running", body = ApiResponse<HealthDto>)
    ),
)]
pub async fn health() -> Envelope<HealthDto> {
    Envelope::ok(HealthDto {
        status: "ok".to_string(),
    })
}
