use chrono::Local;
use sea_orm::DatabaseConnection;

use crate::{
    data::{ElfRepository, ToyOrderRepository},
    error::{elf::ElfError, Error},
    model::elf::{CreateElfDto, ElfListItemDto, ElfProfileDto, UpdateElfDto, DEFAULT_SPECIALTY},
};

/// Service for managing elf worker profiles.
///
/// Every operation that returns a full profile re-derives the completed-toys
/// count with a fresh join query, so responses always reflect post-mutation
/// state exactly once.
pub struct ElfService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ElfService<'a> {
    /// Creates a new instance of [`ElfService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the elf roster, ordered by name ascending.
    pub async fn list_elves(&self) -> Result<Vec<ElfListItemDto>, Error> {
        let elves = ElfRepository::new(self.db).list_by_name().await?;

        Ok(elves
            .into_iter()
            .map(|elf| ElfListItemDto {
                name: elf.name,
                profile_image: elf.profile_image,
            })
            .collect())
    }

    /// Retrieves a single profile with its derived fields.
    ///
    /// # Returns
    /// - `Ok(ElfProfileDto)` - Profile found by exact name match
    /// - `Err(Error::ElfError(NotFound))` - No profile matches the name
    /// - `Err(Error::DbErr)` - Store operation failed
    pub async fn get_elf(&self, name: &str) -> Result<ElfProfileDto, Error> {
        let elf = ElfRepository::new(self.db)
            .get_by_name(name)
            .await?
            .ok_or(ElfError::NotFound)?;

        self.profile_with_completed_count(elf).await
    }

    /// Creates a new elf profile.
    ///
    /// Defaults the specialty to `"General"` and the service start date to
    /// the current local calendar date when omitted.
    ///
    /// # Returns
    /// - `Ok(ElfProfileDto)` - The created profile with a zero completed count
    /// - `Err(Error::ElfError(NameRequired))` - Name missing or empty
    /// - `Err(Error::ElfError(NameTaken))` - Another profile holds the name
    /// - `Err(Error::DbErr)` - Store operation failed
    pub async fn create_elf(&self, input: CreateElfDto) -> Result<ElfProfileDto, Error> {
        let name = input
            .name
            .filter(|name| !name.is_empty())
            .ok_or(ElfError::NameRequired)?;

        let elf_repository = ElfRepository::new(self.db);

        if elf_repository.get_by_name(&name).await?.is_some() {
            return Err(ElfError::NameTaken.into());
        }

        let specialty = input
            .specialty
            .unwrap_or_else(|| DEFAULT_SPECIALTY.to_string());
        let service_start_date = input
            .service_start_date
            .unwrap_or_else(|| Local::now().date_naive().format("%Y-%m-%d").to_string());

        let elf = elf_repository
            .create(name, specialty, service_start_date)
            .await?;

        self.profile_with_completed_count(elf).await
    }

    /// Applies a partial update to a profile.
    ///
    /// Only supplied fields change. Dates and specialties are stored as
    /// given; validating them is a client convenience, not a data-integrity
    /// guarantee of this service.
    ///
    /// # Returns
    /// - `Ok(ElfProfileDto)` - The refreshed post-update profile
    /// - `Err(Error::ElfError(NoFieldsToUpdate))` - No recognized field given
    /// - `Err(Error::ElfError(NotFound))` - No profile matches the name
    /// - `Err(Error::DbErr)` - Store operation failed
    pub async fn update_elf(
        &self,
        name: &str,
        changes: UpdateElfDto,
    ) -> Result<ElfProfileDto, Error> {
        if !changes.has_updates() {
            return Err(ElfError::NoFieldsToUpdate.into());
        }

        let elf_repository = ElfRepository::new(self.db);

        let elf = elf_repository
            .get_by_name(name)
            .await?
            .ok_or(ElfError::NotFound)?;

        let elf = elf_repository.update(elf, &changes).await?;

        self.profile_with_completed_count(elf).await
    }

    /// Attaches a freshly derived completed-toys count to a stored profile.
    async fn profile_with_completed_count(
        &self,
        elf: entity::elf_profile::Model,
    ) -> Result<ElfProfileDto, Error> {
        let toys_completed = ToyOrderRepository::new(self.db)
            .count_completed(&elf.name)
            .await?;

        Ok(ElfProfileDto::from_model(elf, toys_completed as i64))
    }
}
