use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter,
};

use crate::model::toy_order::{NewToyOrder, ToyOrderFilter, ToyStatus};

/// Repository for the `toy_orders` table.
pub struct ToyOrderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ToyOrderRepository<'a> {
    /// Creates a new instance of [`ToyOrderRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists orders matching the filter; present predicates combine with
    /// logical AND. No defined sort order.
    pub async fn list(
        &self,
        filter: &ToyOrderFilter,
    ) -> Result<Vec<entity::toy_order::Model>, DbErr> {
        let mut query = entity::prelude::ToyOrder::find();

        if let Some(status) = &filter.status {
            query = query.filter(entity::toy_order::Column::Status.eq(status));
        }
        if let Some(assigned_elf) = &filter.assigned_elf {
            query = query.filter(entity::toy_order::Column::AssignedElf.eq(assigned_elf));
        }

        query.all(self.db).await
    }

    /// Finds an order by id.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<entity::toy_order::Model>, DbErr> {
        entity::prelude::ToyOrder::find_by_id(id).one(self.db).await
    }

    /// Inserts a new order with the resolved assignee and the fixed creation
    /// defaults (`To Do` status, constant due date).
    pub async fn create(
        &self,
        id: String,
        input: NewToyOrder,
        assigned_elf: String,
        due_date: String,
    ) -> Result<entity::toy_order::Model, DbErr> {
        let order = entity::toy_order::ActiveModel {
            id: ActiveValue::Set(id),
            child_name: ActiveValue::Set(input.child_name),
            age: ActiveValue::Set(input.age),
            location: ActiveValue::Set(input.location),
            toy: ActiveValue::Set(input.toy),
            category: ActiveValue::Set(input.category),
            assigned_elf: ActiveValue::Set(assigned_elf),
            status: ActiveValue::Set(ToyStatus::ToDo.as_str().to_string()),
            due_date: ActiveValue::Set(due_date),
            notes: ActiveValue::Set(Some(input.notes.unwrap_or_default())),
            nice_list_score: ActiveValue::Set(input.nice_list_score),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        order.insert(self.db).await
    }

    /// Writes a new status onto an already fetched order and returns the
    /// post-update row.
    pub async fn set_status(
        &self,
        order: entity::toy_order::Model,
        status: ToyStatus,
    ) -> Result<entity::toy_order::Model, DbErr> {
        let mut order = order.into_active_model();
        order.status = ActiveValue::Set(status.as_str().to_string());

        order.update(self.db).await
    }

    /// Writes a new assignee onto an already fetched order and returns the
    /// post-update row. The name is not checked against the elf roster.
    pub async fn set_assigned_elf(
        &self,
        order: entity::toy_order::Model,
        assigned_elf: String,
    ) -> Result<entity::toy_order::Model, DbErr> {
        let mut order = order.into_active_model();
        order.assigned_elf = ActiveValue::Set(assigned_elf);

        order.update(self.db).await
    }

    /// Counts an elf's orders currently in `Ready to Deliver`; the derived
    /// `toys_completed` figure on profile responses.
    pub async fn count_completed(&self, assigned_elf: &str) -> Result<u64, DbErr> {
        entity::prelude::ToyOrder::find()
            .filter(entity::toy_order::Column::AssignedElf.eq(assigned_elf))
            .filter(entity::toy_order::Column::Status.eq(ToyStatus::ReadyToDeliver.as_str()))
            .count(self.db)
            .await
    }
}
