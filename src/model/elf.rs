//! Elf profile DTOs and derived-field helpers.

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Specialty recorded for elves that have not picked a toy category.
pub static DEFAULT_SPECIALTY: &str = "General";

/// One row of the elf roster listing: just enough to render the login
/// selection screen.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ElfListItemDto {
    /// The elf's unique name
    pub name: String,
    /// Base64 data URL of the profile image, if one was uploaded
    pub profile_image: Option<String>,
}

/// A full elf profile as returned by the profile endpoints, including the
/// derived fields recomputed on every response.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ElfProfileDto {
    /// Surrogate key assigned by the store
    pub id: i32,
    /// The elf's unique name
    pub name: String,
    /// Toy category specialty, or `"General"`
    pub specialty: String,
    /// Calendar date the elf joined the workshop, `YYYY-MM-DD`
    pub service_start_date: String,
    /// Base64 data URL of the profile image, if one was uploaded
    pub profile_image: Option<String>,
    /// Timestamp the profile was created, immutable
    pub created_at: NaiveDateTime,
    /// Count of this elf's orders currently in `Ready to Deliver`
    pub toys_completed: i64,
    /// Whole years since the service start date; absent when the stored
    /// date does not parse
    pub years_of_service: Option<i32>,
}

impl ElfProfileDto {
    /// Builds the response DTO from a stored profile and a freshly derived
    /// completed-toys count.
    pub fn from_model(model: entity::elf_profile::Model, toys_completed: i64) -> Self {
        let years = NaiveDate::parse_from_str(&model.service_start_date, "%Y-%m-%d")
            .ok()
            .map(|start| years_of_service(start, Local::now().date_naive()));

        Self {
            id: model.id,
            name: model.name,
            specialty: model.specialty,
            service_start_date: model.service_start_date,
            profile_image: model.profile_image,
            created_at: model.created_at,
            toys_completed,
            years_of_service: years,
        }
    }
}

/// Request body for creating an elf profile.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateElfDto {
    /// The elf's name; must be unique
    pub name: Option<String>,
    /// Toy category specialty; defaults to `"General"`
    pub specialty: Option<String>,
    /// Service start date; defaults to the current local calendar date
    pub service_start_date: Option<String>,
}

/// Request body for a partial profile update; only supplied fields change.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateElfDto {
    /// New specialty
    pub specialty: Option<String>,
    /// New service start date
    pub service_start_date: Option<String>,
    /// New profile image as a base64 data URL
    pub profile_image: Option<String>,
}

impl UpdateElfDto {
    /// Whether the body carries at least one recognized field.
    pub fn has_updates(&self) -> bool {
        self.specialty.is_some()
            || self.service_start_date.is_some()
            || self.profile_image.is_some()
    }
}

/// Whole years elapsed between the service start date and today, counting a
/// year only once its anniversary has passed.
pub fn years_of_service(start: NaiveDate, today: NaiveDate) -> i32 {
    let years = today.year() - start.year();

    if (today.month(), today.day()) < (start.month(), start.day()) {
        years - 1
    } else {
        years
    }
}
