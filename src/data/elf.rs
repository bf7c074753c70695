use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::elf::UpdateElfDto;

/// Repository for the `elf_profiles` table.
pub struct ElfRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ElfRepository<'a> {
    /// Creates a new instance of [`ElfRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all elf profiles in store iteration order.
    ///
    /// Auto-assignment scans this listing; the roster endpoint uses
    /// [`Self::list_by_name`] instead.
    pub async fn list(&self) -> Result<Vec<entity::elf_profile::Model>, DbErr> {
        entity::prelude::ElfProfile::find().all(self.db).await
    }

    /// Lists all elf profiles ordered by name ascending.
    pub async fn list_by_name(&self) -> Result<Vec<entity::elf_profile::Model>, DbErr> {
        entity::prelude::ElfProfile::find()
            .order_by_asc(entity::elf_profile::Column::Name)
            .all(self.db)
            .await
    }

    /// Finds a profile by exact, case-sensitive name match.
    pub async fn get_by_name(
        &self,
        name: &str,
    ) -> Result<Option<entity::elf_profile::Model>, DbErr> {
        entity::prelude::ElfProfile::find()
            .filter(entity::elf_profile::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Creates a new elf profile without an image.
    pub async fn create(
        &self,
        name: String,
        specialty: String,
        service_start_date: String,
    ) -> Result<entity::elf_profile::Model, DbErr> {
        let elf = entity::elf_profile::ActiveModel {
            name: ActiveValue::Set(name),
            specialty: ActiveValue::Set(specialty),
            service_start_date: ActiveValue::Set(service_start_date),
            profile_image: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        elf.insert(self.db).await
    }

    /// Applies the supplied fields of a partial update to an already fetched
    /// profile, leaving everything else untouched.
    pub async fn update(
        &self,
        elf: entity::elf_profile::Model,
        changes: &UpdateElfDto,
    ) -> Result<entity::elf_profile::Model, DbErr> {
        let mut elf = elf.into_active_model();

        if let Some(specialty) = &changes.specialty {
            elf.specialty = ActiveValue::Set(specialty.clone());
        }
        if let Some(service_start_date) = &changes.service_start_date {
            elf.service_start_date = ActiveValue::Set(service_start_date.clone());
        }
        if let Some(profile_image) = &changes.profile_image {
            elf.profile_image = ActiveValue::Set(Some(profile_image.clone()));
        }

        elf.update(self.db).await
    }
}
