//! Shared application state handed to every request handler.

use sea_orm::DatabaseConnection;

use crate::graphql::WorkshopSchema;

/// Application state: the store handle plus the prebuilt GraphQL schema.
///
/// The store is injected here once at startup and passed to each service at
/// construction; nothing reads it through ambient globals.
#[derive(Clone)]
pub struct AppState {
    /// Store handle shared by both API surfaces.
    pub db: DatabaseConnection,
    /// GraphQL schema for the toy order API, carrying its own copy of the
    /// store handle as context data.
    pub graphql: WorkshopSchema,
}

impl AppState {
    /// Builds the application state from a connected store.
    pub fn new(db: DatabaseConnection) -> Self {
        let graphql = crate::graphql::build_schema(db.clone());

        Self { db, graphql }
    }
}
