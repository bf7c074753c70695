use axum::http::{Method, StatusCode};
use workshop_test_utils::TestError;

use crate::util::{send_json, test_app};

/// Expect the health check to report OK with a timestamp
#[tokio::test]
async fn test_health_check() -> Result<(), TestError> {
    let (app, _db) = test_app().await?;

    let (status, body) = send_json(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
    assert!(body["timestamp"].is_string());

    Ok(())
}
