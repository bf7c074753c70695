//! Elf profile error types.
//!
//! Client-facing failures of the REST profile API. Messages match the
//! reference implementation so existing dashboard clients keep working.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Elf profile error type.
#[derive(Error, Debug)]
pub enum ElfError {
    /// Profile creation was attempted without a name.
    #[error("Name is required")]
    NameRequired,

    /// Profile creation was attempted with a name that is already taken.
    ///
    /// Names are matched case-sensitively; `"jingleberry"` and
    /// `"Jingleberry"` are distinct profiles.
    #[error("An elf with this name already exists")]
    NameTaken,

    /// No profile matches the requested name exactly.
    #[error("Elf not found")]
    NotFound,

    /// A profile update supplied none of the recognized fields.
    #[error("No fields to update")]
    NoFieldsToUpdate,
}

impl IntoResponse for ElfError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
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
