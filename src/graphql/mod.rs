//! GraphQL surface for toy orders.
//!
//! Exposes the schema the reference dashboard queries: `toyOrders` /
//! `toyOrder` queries and the `addToyOrder` / `updateToyOrderStatus` /
//! `updateToyOrderElf` mutations, with snake_case field names preserved for
//! client compatibility. Resolvers delegate to [`ToyOrderService`]; domain
//! errors surface as GraphQL error messages while store failures are logged
//! and sanitized.

pub mod toy_order;

use async_graphql::{http::GraphiQLSource, EmptySubscription, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    response::{Html, IntoResponse},
};
use sea_orm::DatabaseConnection;

use crate::{error::Error, model::app::AppState};

pub use toy_order::{MutationRoot, QueryRoot};

/// The executable GraphQL schema for the toy order API.
pub type WorkshopSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Builds the schema with the store handle attached as context data.
pub fn build_schema(db: DatabaseConnection) -> WorkshopSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(db)
        .finish()
}

/// Executes a GraphQL request against the application schema.
pub async fn graphql_handler(
    State(state): State<AppState>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    state.graphql.execute(request.into_inner()).await.into()
}

/// Serves the GraphiQL IDE for interactive exploration of the order API.
pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// Converts an application error into a GraphQL error.
///
/// Domain errors keep their message; anything else is logged and replaced
/// with a generic message so engine internals never reach clients.
pub(crate) fn into_graphql_error(err: Error) -> async_graphql::Error {
    match &err {
        Error::ToyOrderError(_) | Error::ElfError(_) => async_graphql::Error::new(err.to_string()),
        _ => {
            tracing::error!("{}", err);

            async_graphql::Error::new("Internal server error")
        }
    }
}
