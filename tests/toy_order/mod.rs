//! HTTP-level tests for the toy order GraphQL API, including the
//! cross-surface consistency checks between GraphQL mutations and the
//! REST profile counts.

use axum::http::{Method, StatusCode};
use serde_json::json;
use workshop_test_utils::{fixtures::factory, TestError};

use crate::util::{graphql, send_json, test_app};

/// Expect an empty order list from a fresh store
#[tokio::test]
async fn test_toy_orders_empty() -> Result<(), TestError> {
    let (app, _db) = test_app().await?;

    let body = graphql(&app, "{ toyOrders { id } }").await;

    assert!(body["errors"].is_null());
    assert_eq!(body["data"]["toyOrders"], json!([]));

    Ok(())
}

/// Expect null (not an error) for an unknown order id
#[tokio::test]
async fn test_toy_order_unknown_id_is_null() -> Result<(), TestError> {
    let (app, _db) = test_app().await?;

    let body = graphql(&app, r#"{ toyOrder(id: "999") { id } }"#).await;

    assert!(body["errors"].is_null());
    assert!(body["data"]["toyOrder"].is_null());

    Ok(())
}

/// Expect the filter to return exactly the intersection of both predicates
#[tokio::test]
async fn test_toy_orders_filter_composition() -> Result<(), TestError> {
    let (app, db) = test_app().await?;
    factory::create_toy_order(&db, "1", "Jingleberry", "To Do", "Wooden Trains").await?;
    factory::create_toy_order(&db, "2", "Jingleberry", "Quality Check", "Wooden Trains").await?;
    factory::create_toy_order(&db, "3", "Snowflake", "To Do", "Teddy Bears").await?;

    let body = graphql(
        &app,
        r#"{ toyOrders(filter: { status: "To Do", assigned_elf: "Jingleberry" }) { id } }"#,
    )
    .await;

    assert!(body["errors"].is_null());
    assert_eq!(body["data"]["toyOrders"], json!([{ "id": "1" }]));

    Ok(())
}

/// End-to-end scenario: create an elf over REST, then expect auto-assignment
/// to route a matching order to them with the creation defaults applied
#[tokio::test]
async fn test_create_order_auto_assignment_end_to_end() -> Result<(), TestError> {
    let (app, _db) = test_app().await?;

    let (status, _body) = send_json(
        &app,
        Method::POST,
        "/elf",
        Some(json!({ "name": "Testy Toymaker", "specialty": "Puzzles" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let body = graphql(
        &app,
        r#"mutation {
            addToyOrder(input: {
                child_name: "Oliver Smith",
                age: 8,
                location: "London, UK",
                toy: "Builder Blocks Mega Set",
                category: "Puzzles",
                assigned_elf: "auto",
                nice_list_score: 92
            }) { id assigned_elf status due_date notes score_label } }"#,
    )
    .await;

    assert!(body["errors"].is_null());
    let order = &body["data"]["addToyOrder"];
    assert_eq!(order["assigned_elf"], "Testy Toymaker");
    assert_eq!(order["status"], "To Do");
    assert_eq!(order["due_date"], "2024-12-24");
    assert_eq!(order["notes"], "");
    assert_eq!(order["score_label"], "Excellent");

    Ok(())
}

/// Expect Unassigned when auto-assignment runs against an empty roster
#[tokio::test]
async fn test_create_order_unassigned_fallback() -> Result<(), TestError> {
    let (app, _db) = test_app().await?;

    let body = graphql(
        &app,
        r#"mutation {
            addToyOrder(input: {
                child_name: "Emily Johnson",
                age: 7,
                location: "New York, USA",
                toy: "Deluxe Teddy Bear",
                category: "Teddy Bears",
                assigned_elf: "auto",
                nice_list_score: 98
            }) { assigned_elf } }"#,
    )
    .await;

    assert!(body["errors"].is_null());
    assert_eq!(body["data"]["addToyOrder"]["assigned_elf"], "Unassigned");

    Ok(())
}

/// Expect a status update to persist and return the post-update row
#[tokio::test]
async fn test_update_status() -> Result<(), TestError> {
    let (app, db) = test_app().await?;
    factory::create_toy_order(&db, "1", "Jingleberry", "To Do", "Wooden Trains").await?;

    let body = graphql(
        &app,
        r#"mutation { updateToyOrderStatus(id: "1", status: "In Progress") { id status } }"#,
    )
    .await;

    assert!(body["errors"].is_null());
    assert_eq!(body["data"]["updateToyOrderStatus"]["status"], "In Progress");

    let body = graphql(&app, r#"{ toyOrder(id: "1") { status } }"#).await;
    assert_eq!(body["data"]["toyOrder"]["status"], "In Progress");

    Ok(())
}

/// Expect an unrecognized status to be rejected without mutating the row
#[tokio::test]
async fn test_update_status_invalid() -> Result<(), TestError> {
    let (app, db) = test_app().await?;
    factory::create_toy_order(&db, "1", "Jingleberry", "To Do", "Wooden Trains").await?;

    let body = graphql(
        &app,
        r#"mutation { updateToyOrderStatus(id: "1", status: "Not A Status") { id } }"#,
    )
    .await;

    let message = body["errors"][0]["message"].as_str().unwrap();
    assert!(message.starts_with("Invalid status. Must be one of:"));

    let body = graphql(&app, r#"{ toyOrder(id: "1") { status } }"#).await;
    assert_eq!(body["data"]["toyOrder"]["status"], "To Do");

    Ok(())
}

/// Expect a not-found error when mutating an unknown order
#[tokio::test]
async fn test_update_elf_assignment_not_found() -> Result<(), TestError> {
    let (app, _db) = test_app().await?;

    let body = graphql(
        &app,
        r#"mutation { updateToyOrderElf(id: "999", assigned_elf: "Snowflake") { id } }"#,
    )
    .await;

    assert_eq!(body["errors"][0]["message"], "Toy order not found");

    Ok(())
}

/// Expect reassignment to persist and return the updated row
#[tokio::test]
async fn test_update_elf_assignment() -> Result<(), TestError> {
    let (app, db) = test_app().await?;
    factory::create_toy_order(&db, "1", "Jingleberry", "To Do", "Wooden Trains").await?;

    let body = graphql(
        &app,
        r#"mutation { updateToyOrderElf(id: "1", assigned_elf: "Snowflake Tinselwhisk") { assigned_elf } }"#,
    )
    .await;

    assert!(body["errors"].is_null());
    assert_eq!(
        body["data"]["updateToyOrderElf"]["assigned_elf"],
        "Snowflake Tinselwhisk"
    );

    Ok(())
}

/// Expect the REST toys_completed count to track orders moved to
/// Ready to Deliver over GraphQL
#[tokio::test]
async fn test_completed_count_tracks_status_updates() -> Result<(), TestError> {
    let (app, db) = test_app().await?;
    factory::create_elf(&db, "Jingleberry Sparkletoes", "Wooden Trains").await?;
    factory::create_toy_order(&db, "1", "Jingleberry Sparkletoes", "To Do", "Wooden Trains")
        .await?;
    factory::create_toy_order(&db, "2", "Jingleberry Sparkletoes", "To Do", "Wooden Trains")
        .await?;

    let (_, body) = send_json(&app, Method::GET, "/elf/Jingleberry%20Sparkletoes", None).await;
    assert_eq!(body["toys_completed"], 0);

    graphql(
        &app,
        r#"mutation { updateToyOrderStatus(id: "1", status: "Ready to Deliver") { id } }"#,
    )
    .await;

    let (_, body) = send_json(&app, Method::GET, "/elf/Jingleberry%20Sparkletoes", None).await;
    assert_eq!(body["toys_completed"], 1);

    graphql(
        &app,
        r#"mutation { updateToyOrderStatus(id: "2", status: "Ready to Deliver") { id } }"#,
    )
    .await;

    let (_, body) = send_json(&app, Method::GET, "/elf/Jingleberry%20Sparkletoes", None).await;
    assert_eq!(body["toys_completed"], 2);

    Ok(())
}
