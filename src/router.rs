//! HTTP routing and OpenAPI documentation configuration.
//!
//! Registers the REST endpoints with their utoipa specifications, serves
//! Swagger UI at `/api/docs`, and mounts the GraphQL endpoint (POST for
//! queries/mutations, GET for the GraphiQL IDE). The router is layered with
//! request tracing and a permissive CORS policy, matching the reference
//! server which allowed the dashboard to be served from any origin.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, graphql, model::app::AppState};

/// Builds the application's HTTP router with all endpoints and Swagger UI
/// documentation.
///
/// # Registered Endpoints
/// - `GET /elves` - List the elf roster
/// - `GET /elf/{name}` - Get a single elf profile
/// - `POST /elf` - Create an elf profile
/// - `PUT /elf/{name}` - Partially update an elf profile
/// - `GET /health` - Liveness check
/// - `POST /graphql` - Toy order GraphQL API (`GET` serves GraphiQL)
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Workshop", description = "Santa's Workshop dashboard API"), tags(
        (name = controller::elf::ELF_TAG, description = "Elf profile API routes"),
        (name = controller::health::HEALTH_TAG, description = "Health check"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::elf::list_elves))
        .routes(routes!(controller::elf::get_elf))
        .routes(routes!(controller::elf::create_elf))
        .routes(routes!(controller::elf::update_elf))
        .routes(routes!(controller::health::health))
        .split_for_parts();

    let routes = routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .route(
            "/graphql",
            get(graphql::graphiql).post(graphql::graphql_handler),
        );

    routes
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
