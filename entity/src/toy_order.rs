use sea_orm::entity::prelude::*;

/// A toy order: one child's requested toy, tracked through four
/// production stages.
///
/// `id` is a string key; seeded rows use small sequential integers as
/// strings while orders created at runtime use a millisecond-epoch string.
/// `assigned_elf` holds an elf profile name; there is no foreign-key
/// constraint backing it, so orphaned references are possible.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "toy_orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub child_name: String,
    pub age: i32,
    pub location: String,
    pub toy: String,
    pub category: String,
    pub assigned_elf: String,
    pub status: String,
    pub due_date: String,
    pub notes: Option<String>,
    pub nice_list_score: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
