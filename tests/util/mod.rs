//! Shared helpers for HTTP-level tests: an app router over a fresh
//! in-memory store, plus request plumbing.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use tower::util::ServiceExt;
use workshop::{model::app::AppState, router};
use workshop_test_utils::{test_setup_with_workshop_tables, TestError};

/// Builds the full application router over a fresh in-memory store.
///
/// The store handle is returned alongside so tests can arrange fixtures
/// directly.
pub async fn test_app() -> Result<(Router, DatabaseConnection), TestError> {
    let test = test_setup_with_workshop_tables!()?;
    let db = test.db;

    let state = AppState::new(db.clone());
    let app = router::routes().with_state(state);

    Ok((app, db))
}

/// Sends a JSON request and returns the status code with the parsed body.
pub async fn send_json(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

/// Executes a GraphQL operation against `/graphql` and returns the full
/// response document (`data` and `errors`).
pub async fn graphql(app: &Router, query: &str) -> serde_json::Value {
    let (status, body) = send_json(
        app,
        Method::POST,
        "/graphql",
        Some(serde_json::json!({ "query": query })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);

    body
}
