//! Error types for the workshop server.
//!
//! Each domain (elf profiles, toy orders, configuration) has its own error
//! enum; the aggregating [`Error`] type converts from all of them plus the
//! underlying sea-orm error so handlers can use `?` throughout. All errors
//! implement `IntoResponse` for axum. Store failures are logged with their
//! real cause and surfaced to clients as a generic 500 body so engine
//! internals never leak over the wire.

pub mod config;
pub mod elf;
pub mod toy_order;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{config::ConfigError, elf::ElfError, toy_order::ToyOrderError},
    model::api::ErrorDto,
};

/// Main error type for the workshop server.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Elf profile error (missing name, duplicate name, unknown elf).
    #[error(transparent)]
    ElfError(#[from] ElfError),
    /// Toy order error (unknown order, unrecognized status value).
    #[error(transparent)]
    ToyOrderError(#[from] ToyOrderError),
    /// Database error (query failures, connection issues, constraint
    /// violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ElfError(err) => err.into_response(),
            Self::ToyOrderError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal
/// Server Error response.
///
/// Logs the real error message and returns a generic body to the client, so
/// details of the underlying engine are never exposed to API consumers.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
