//! Generic API response bodies.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response of the health check endpoint.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    /// Always `"OK"` while the server is able to respond
    pub status: String,
    /// RFC 3339 timestamp taken when the check ran
    pub timestamp: String,
}
