use sea_orm::entity::prelude::*;

/// An elf worker profile.
///
/// `name` is the human-facing identifier used across both APIs; toy orders
/// reference it by string value rather than by `id`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "elf_profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub specialty: String,
    /// Calendar date in `YYYY-MM-DD` form, no time component.
    pub service_start_date: String,
    /// Base64-encoded data URL for a small profile image.
    pub profile_image: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
