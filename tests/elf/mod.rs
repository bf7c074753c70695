//! HTTP-level tests for the elf profile REST API.

use axum::http::{Method, StatusCode};
use serde_json::json;
use workshop_test_utils::{fixtures::factory, TestError};

use crate::util::{send_json, test_app};

/// Expect an empty roster from a fresh store
#[tokio::test]
async fn test_list_elves_empty() -> Result<(), TestError> {
    let (app, _db) = test_app().await?;

    let (status, body) = send_json(&app, Method::GET, "/elves", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    Ok(())
}

/// Expect the roster ordered by name with only name and image fields
#[tokio::test]
async fn test_list_elves_ordered() -> Result<(), TestError> {
    let (app, db) = test_app().await?;
    factory::create_elf(&db, "Snowflake Tinselwhisk", "Teddy Bears").await?;
    factory::create_elf(&db, "Jingleberry Sparkletoes", "Wooden Trains").await?;

    let (status, body) = send_json(&app, Method::GET, "/elves", None).await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Jingleberry Sparkletoes", "Snowflake Tinselwhisk"]);

    Ok(())
}

/// Expect profile creation to apply defaults and report zero completed toys
#[tokio::test]
async fn test_create_elf() -> Result<(), TestError> {
    let (app, _db) = test_app().await?;

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/elf",
        Some(json!({ "name": "Testy Toymaker" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Testy Toymaker");
    assert_eq!(body["specialty"], "General");
    assert_eq!(body["toys_completed"], 0);

    Ok(())
}

/// Expect 400 with the specific message on duplicate names
#[tokio::test]
async fn test_create_elf_duplicate() -> Result<(), TestError> {
    let (app, _db) = test_app().await?;

    send_json(
        &app,
        Method::POST,
        "/elf",
        Some(json!({ "name": "Testy Toymaker" })),
    )
    .await;
    let (status, body) = send_json(
        &app,
        Method::POST,
        "/elf",
        Some(json!({ "name": "Testy Toymaker" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "An elf with this name already exists");

    Ok(())
}

/// Expect 400 when the name is missing
#[tokio::test]
async fn test_create_elf_missing_name() -> Result<(), TestError> {
    let (app, _db) = test_app().await?;

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/elf",
        Some(json!({ "specialty": "Dolls" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Name is required");

    Ok(())
}

/// Expect 404 for an unknown elf name
#[tokio::test]
async fn test_get_elf_not_found() -> Result<(), TestError> {
    let (app, _db) = test_app().await?;

    let (status, body) = send_json(&app, Method::GET, "/elf/Nonexistent%20Elf", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Elf not found");

    Ok(())
}

/// Expect a partial update to change only the supplied field
#[tokio::test]
async fn test_update_elf_partial() -> Result<(), TestError> {
    let (app, db) = test_app().await?;
    let elf = factory::create_elf(&db, "Peppermint Candycane", "Video Games").await?;

    let (status, body) = send_json(
        &app,
        Method::PUT,
        "/elf/Peppermint%20Candycane",
        Some(json!({ "specialty": "Dolls" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["specialty"], "Dolls");
    assert_eq!(body["service_start_date"], elf.service_start_date);
    assert!(body["profile_image"].is_null());

    Ok(())
}

/// Expect 400 when the update body carries no recognized field
#[tokio::test]
async fn test_update_elf_no_fields() -> Result<(), TestError> {
    let (app, db) = test_app().await?;
    factory::create_elf(&db, "Peppermint Candycane", "Video Games").await?;

    let (status, body) = send_json(
        &app,
        Method::PUT,
        "/elf/Peppermint%20Candycane",
        Some(json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No fields to update");

    Ok(())
}

/// Expect 404 when updating an unknown elf
#[tokio::test]
async fn test_update_elf_not_found() -> Result<(), TestError> {
    let (app, _db) = test_app().await?;

    let (status, body) = send_json(
        &app,
        Method::PUT,
        "/elf/Nonexistent%20Elf",
        Some(json!({ "specialty": "Dolls" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Elf not found");

    Ok(())
}
