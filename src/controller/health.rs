//! Health check endpoint.

use axum::{http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;

use crate::model::api::HealthDto;

/// OpenAPI tag for health routes.
pub static HEALTH_TAG: &str = "health";

/// Report server liveness
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Server is up", body = HealthDto)
    ),
)]
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthDto {
            status: "OK".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }),
    )
}
