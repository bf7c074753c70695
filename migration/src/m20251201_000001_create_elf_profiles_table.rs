use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ElfProfiles::Table)
                    .if_not_exists()
                    .col(pk_auto(ElfProfiles::Id))
                    .col(string_uniq(ElfProfiles::Name))
                    .col(string(ElfProfiles::Specialty))
                    .col(string(ElfProfiles::ServiceStartDate))
                    .col(text_null(ElfProfiles::ProfileImage))
                    .col(timestamp(ElfProfiles::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ElfProfiles::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ElfProfiles {
    Table,
    Id,
    Name,
    Specialty,
    ServiceStartDate,
    ProfileImage,
    CreatedAt,
}
