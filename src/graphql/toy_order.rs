//! Toy order GraphQL types and resolvers.

use async_graphql::{ComplexObject, Context, InputObject, Object, Result, SimpleObject, ID};
use sea_orm::DatabaseConnection;

use crate::{
    graphql::into_graphql_error,
    model::toy_order::{score_label, NewToyOrder, ToyOrderFilter},
    service::ToyOrderService,
};

/// A toy order as exposed over GraphQL.
///
/// Matches the reference schema: snake_case field names, no `created_at`.
#[derive(SimpleObject)]
#[graphql(name = "ToyOrder", rename_fields = "snake_case", complex)]
pub struct ToyOrderDto {
    /// Order id; seeded rows use small integers, created rows a
    /// millisecond-epoch string
    pub id: ID,
    /// Name of the child the toy is for
    pub child_name: String,
    /// The child's age in years
    pub age: i32,
    /// Delivery location
    pub location: String,
    /// The requested toy
    pub toy: String,
    /// Toy category
    pub category: String,
    /// Name of the responsible elf
    pub assigned_elf: String,
    /// Production stage, one of the four kanban columns
    pub status: String,
    /// Due date; constant for all orders
    pub due_date: String,
    /// Letter text from the child
    pub notes: Option<String>,
    /// Nice list score in [0, 100]
    pub nice_list_score: i32,
}

#[ComplexObject]
impl ToyOrderDto {
    /// Banding of the nice list score for dashboard display.
    ///
    /// Named explicitly: `rename_fields` on the derive does not reach
    /// complex-object resolvers, which default to camelCase.
    #[graphql(name = "score_label")]
    async fn score_label(&self) -> &'static str {
        score_label(self.nice_list_score)
    }
}

impl From<entity::toy_order::Model> for ToyOrderDto {
    fn from(order: entity::toy_order::Model) -> Self {
        Self {
            id: ID(order.id),
            child_name: order.child_name,
            age: order.age,
            location: order.location,
            toy: order.toy,
            category: order.category,
            assigned_elf: order.assigned_elf,
            status: order.status,
            due_date: order.due_date,
            notes: order.notes,
            nice_list_score: order.nice_list_score,
        }
    }
}

/// Optional listing predicates; present fields combine with logical AND.
#[derive(InputObject)]
#[graphql(name = "ToyOrderFilter", rename_fields = "snake_case")]
pub struct ToyOrderFilterInput {
    /// Restrict to orders in this status
    pub status: Option<String>,
    /// Restrict to orders assigned to this elf name
    pub assigned_elf: Option<String>,
}

impl From<ToyOrderFilterInput> for ToyOrderFilter {
    fn from(filter: ToyOrderFilterInput) -> Self {
        Self {
            status: filter.status,
            assigned_elf: filter.assigned_elf,
        }
    }
}

/// Fields for creating a toy order.
#[derive(InputObject)]
#[graphql(name = "ToyOrderInput", rename_fields = "snake_case")]
pub struct ToyOrderInput {
    /// Name of the child the toy is for
    pub child_name: String,
    /// The child's age in years
    pub age: i32,
    /// Delivery location
    pub location: String,
    /// The requested toy
    pub toy: String,
    /// Toy category, used for auto-assignment matching
    pub category: String,
    /// Elf name, or empty / `"auto"` to request auto-assignment
    pub assigned_elf: String,
    /// Letter text; defaults to empty
    pub notes: Option<String>,
    /// Nice list score in [0, 100]
    pub nice_list_score: i32,
}

impl From<ToyOrderInput> for NewToyOrder {
    fn from(input: ToyOrderInput) -> Self {
        Self {
            child_name: input.child_name,
            age: input.age,
            location: input.location,
            toy: input.toy,
            category: input.category,
            assigned_elf: input.assigned_elf,
            notes: input.notes,
            nice_list_score: input.nice_list_score,
        }
    }
}

/// Root query object.
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Lists toy orders, optionally filtered by status and/or assignee.
    async fn toy_orders(
        &self,
        ctx: &Context<'_>,
        filter: Option<ToyOrderFilterInput>,
    ) -> Result<Vec<ToyOrderDto>> {
        let db = ctx.data::<DatabaseConnection>()?;

        let orders = ToyOrderService::new(db)
            .list_orders(filter.map(Into::into).unwrap_or_default())
            .await
            .map_err(into_graphql_error)?;

        Ok(orders.into_iter().map(Into::into).collect())
    }

    /// Finds a single toy order; unknown ids yield null, not an error.
    async fn toy_order(&self, ctx: &Context<'_>, id: ID) -> Result<Option<ToyOrderDto>> {
        let db = ctx.data::<DatabaseConnection>()?;

        let order = ToyOrderService::new(db)
            .get_order(&id)
            .await
            .map_err(into_graphql_error)?;

        Ok(order.map(Into::into))
    }
}

/// Root mutation object.
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Creates a toy order, auto-assigning an elf when requested.
    async fn add_toy_order(&self, ctx: &Context<'_>, input: ToyOrderInput) -> Result<ToyOrderDto> {
        let db = ctx.data::<DatabaseConnection>()?;

        let order = ToyOrderService::new(db)
            .create_order(input.into())
            .await
            .map_err(into_graphql_error)?;

        Ok(order.into())
    }

    /// Moves an order to a new production stage and returns the updated row.
    async fn update_toy_order_status(
        &self,
        ctx: &Context<'_>,
        id: ID,
        status: String,
    ) -> Result<ToyOrderDto> {
        let db = ctx.data::<DatabaseConnection>()?;

        let order = ToyOrderService::new(db)
            .update_status(&id, &status)
            .await
            .map_err(into_graphql_error)?;

        Ok(order.into())
    }

    /// Reassigns an order to another elf and returns the updated row.
    async fn update_toy_order_elf(
        &self,
        ctx: &Context<'_>,
        id: ID,
        #[graphql(name = "assigned_elf")] assigned_elf: String,
    ) -> Result<ToyOrderDto> {
        let db = ctx.data::<DatabaseConnection>()?;

        let order = ToyOrderService::new(db)
            .update_assigned_elf(&id, assigned_elf)
            .await
            .map_err(into_graphql_error)?;

        Ok(order.into())
    }
}
