use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    data::{ElfRepository, ToyOrderRepository},
    error::{toy_order::ToyOrderError, Error},
    model::toy_order::{
        NewToyOrder, ToyOrderFilter, ToyStatus, AUTO_ASSIGN, DEFAULT_DUE_DATE, UNASSIGNED,
    },
};

/// Service for the toy order lifecycle: querying, creation with
/// auto-assignment, status updates, and reassignment.
pub struct ToyOrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ToyOrderService<'a> {
    /// Creates a new instance of [`ToyOrderService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists orders matching the optional filter predicates.
    pub async fn list_orders(
        &self,
        filter: ToyOrderFilter,
    ) -> Result<Vec<entity::toy_order::Model>, Error> {
        Ok(ToyOrderRepository::new(self.db).list(&filter).await?)
    }

    /// Finds an order by id; an unknown id is not an error.
    pub async fn get_order(&self, id: &str) -> Result<Option<entity::toy_order::Model>, Error> {
        Ok(ToyOrderRepository::new(self.db).get_by_id(id).await?)
    }

    /// Creates a new order.
    ///
    /// The order always starts in `To Do` with the fixed due date. The id is
    /// the current time in milliseconds since epoch as a string; collisions
    /// are astronomically unlikely and not retried. When the input requests
    /// auto-assignment (empty or `"auto"` assignee), an elf is picked by
    /// matching specialty to the order's category.
    pub async fn create_order(
        &self,
        input: NewToyOrder,
    ) -> Result<entity::toy_order::Model, Error> {
        let assigned_elf = self.resolve_assignee(&input).await;

        let id = Utc::now().timestamp_millis().to_string();

        let order = ToyOrderRepository::new(self.db)
            .create(id, input, assigned_elf, DEFAULT_DUE_DATE.to_string())
            .await?;

        Ok(order)
    }

    /// Moves an order to a new production stage and returns the post-update
    /// row.
    ///
    /// All transitions are permitted, including moving `Ready to Deliver`
    /// back to earlier stages. An unrecognized status value is rejected
    /// before anything is written.
    pub async fn update_status(
        &self,
        id: &str,
        status: &str,
    ) -> Result<entity::toy_order::Model, Error> {
        let status = ToyStatus::from_name(status)?;

        let repository = ToyOrderRepository::new(self.db);

        let order = repository
            .get_by_id(id)
            .await?
            .ok_or(ToyOrderError::NotFound)?;

        Ok(repository.set_status(order, status).await?)
    }

    /// Reassigns an order to another elf and returns the post-update row.
    ///
    /// The new assignee is not validated against the elf roster; the
    /// reference dashboard relies on that for ad-hoc names.
    pub async fn update_assigned_elf(
        &self,
        id: &str,
        assigned_elf: String,
    ) -> Result<entity::toy_order::Model, Error> {
        let repository = ToyOrderRepository::new(self.db);

        let order = repository
            .get_by_id(id)
            .await?
            .ok_or(ToyOrderError::NotFound)?;

        Ok(repository.set_assigned_elf(order, assigned_elf).await?)
    }

    /// Resolves the responsible elf for a new order.
    ///
    /// An explicit assignee is kept as-is. Otherwise the roster is scanned
    /// for an elf whose specialty equals the order's category; failing that,
    /// the first elf in store iteration order takes the order, and an empty
    /// roster yields `"Unassigned"`. If the roster lookup itself fails, the
    /// input value is kept as given (or `"Unassigned"` when empty) so order
    /// intake never blocks on the profile table.
    async fn resolve_assignee(&self, input: &NewToyOrder) -> String {
        let requested = input.assigned_elf.clone();

        if !requested.is_empty() && requested != AUTO_ASSIGN {
            return requested;
        }

        match ElfRepository::new(self.db).list().await {
            Ok(elves) => {
                if let Some(matching) = elves.iter().find(|elf| elf.specialty == input.category) {
                    matching.name.clone()
                } else if let Some(first) = elves.first() {
                    first.name.clone()
                } else {
                    UNASSIGNED.to_string()
                }
            }
            Err(err) => {
                tracing::warn!("Failed to load elf roster for auto-assignment: {}", err);

                if requested.is_empty() {
                    UNASSIGNED.to_string()
                } else {
                    requested
                }
            }
        }
    }
}
