//! Data factories for inserting elf profiles and toy orders in tests.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts an elf profile with the given name and specialty.
///
/// The service start date is fixed to a date far enough in the past that
/// derived years-of-service values stay positive.
pub async fn create_elf(
    db: &DatabaseConnection,
    name: &str,
    specialty: &str,
) -> Result<entity::elf_profile::Model, DbErr> {
    let elf = entity::elf_profile::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        specialty: ActiveValue::Set(specialty.to_string()),
        service_start_date: ActiveValue::Set("1892-12-01".to_string()),
        profile_image: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    elf.insert(db).await
}

/// Inserts a toy order assigned to the given elf in the given status.
pub async fn create_toy_order(
    db: &DatabaseConnection,
    id: &str,
    assigned_elf: &str,
    status: &str,
    category: &str,
) -> Result<entity::toy_order::Model, DbErr> {
    let order = entity::toy_order::ActiveModel {
        id: ActiveValue::Set(id.to_string()),
        child_name: ActiveValue::Set("Test Child".to_string()),
        age: ActiveValue::Set(8),
        location: ActiveValue::Set("North Pole".to_string()),
        toy: ActiveValue::Set("Test Toy".to_string()),
        category: ActiveValue::Set(category.to_string()),
        assigned_elf: ActiveValue::Set(assigned_elf.to_string()),
        status: ActiveValue::Set(status.to_string()),
        due_date: ActiveValue::Set("2024-12-24".to_string()),
        notes: ActiveValue::Set(Some(String::new())),
        nice_list_score: ActiveValue::Set(90),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
    };

    order.insert(db).await
}
