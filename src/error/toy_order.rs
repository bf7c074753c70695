//! Toy order error types.
//!
//! These surface through the GraphQL API as error messages rather than HTTP
//! status codes; the `IntoResponse` implementation exists for completeness
//! should an order operation ever be exposed over REST.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::{api::ErrorDto, toy_order::ToyStatus};

/// Toy order error type.
#[derive(Error, Debug)]
pub enum ToyOrderError {
    /// No order exists with the requested id.
    #[error("Toy order not found")]
    NotFound,

    /// A status update used a value outside the four recognized stages.
    ///
    /// The message enumerates the valid stages; the offending value is not
    /// echoed back because clients match on the exact string.
    #[error("Invalid status. Must be one of: {}", ToyStatus::names().join(", "))]
    InvalidStatus,
}

impl IntoResponse for ToyOrderError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InvalidStatus => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expect the exact client-visible message listing all four stages
    #[test]
    fn test_invalid_status_message() {
        assert_eq!(
            ToyOrderError::InvalidStatus.to_string(),
            "Invalid status. Must be one of: To Do, In Progress, Quality Check, Ready to Deliver"
        );
    }
}
