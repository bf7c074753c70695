//! Elf profile REST handlers.
//!
//! Thin wrappers that deserialize request bodies, delegate to
//! [`ElfService`], and let the error taxonomy map failures onto HTTP
//! status codes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::Error,
    model::{
        api::ErrorDto,
        app::AppState,
        elf::{CreateElfDto, ElfListItemDto, ElfProfileDto, UpdateElfDto},
    },
    service::ElfService,
};

/// OpenAPI tag for elf profile routes.
pub static ELF_TAG: &str = "elf";

/// List the elf roster, ordered by name
#[utoipa::path(
    get,
    path = "/elves",
    tag = ELF_TAG,
    responses(
        (status = 200, description = "Success when listing elves", body = Vec<ElfListItemDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_elves(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let elf_service = ElfService::new(&state.db);

    let elves = elf_service.list_elves().await?;

    Ok((StatusCode::OK, Json(elves)))
}

/// Get a single elf profile with derived fields
#[utoipa::path(
    get,
    path = "/elf/{name}",
    tag = ELF_TAG,
    params(
        ("name" = String, Path, description = "Elf name, matched case-sensitively")
    ),
    responses(
        (status = 200, description = "Success when retrieving the profile", body = ElfProfileDto),
        (status = 404, description = "Elf not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_elf(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let elf_service = ElfService::new(&state.db);

    let profile = elf_service.get_elf(&name).await?;

    Ok((StatusCode::OK, Json(profile)))
}

/// Create a new elf profile
#[utoipa::path(
    post,
    path = "/elf",
    tag = ELF_TAG,
    request_body = CreateElfDto,
    responses(
        (status = 200, description = "Success when creating the profile", body = ElfProfileDto),
        (status = 400, description = "Missing name or duplicate name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_elf(
    State(state): State<AppState>,
    Json(body): Json<CreateElfDto>,
) -> Result<impl IntoResponse, Error> {
    let elf_service = ElfService::new(&state.db);

    let profile = elf_service.create_elf(body).await?;

    Ok((StatusCode::OK, Json(profile)))
}

/// Partially update an elf profile
#[utoipa::path(
    put,
    path = "/elf/{name}",
    tag = ELF_TAG,
    params(
        ("name" = String, Path, description = "Elf name, matched case-sensitively")
    ),
    request_body = UpdateElfDto,
    responses(
        (status = 200, description = "Success when updating the profile", body = ElfProfileDto),
        (status = 400, description = "No fields to update", body = ErrorDto),
        (status = 404, description = "Elf not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_elf(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(body): Json<UpdateElfDto>,
) -> Result<impl IntoResponse, Error> {
    let elf_service = ElfService::new(&state.db);

    let profile = elf_service.update_elf(&name, body).await?;

    Ok((StatusCode::OK, Json(profile)))
}
