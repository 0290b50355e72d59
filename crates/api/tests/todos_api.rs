//! Integration tests for the todo endpoints under `/api`.
//!
//! Runs the full router and middleware stack against the in-memory store.

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, create, delete, get, list, patch, post_json, send};

const MISSING_ID: &str = "000000000000000000000000";

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_returns_todo_with_generated_id() {
    let app = common::build_test_app();
    let response = post_json(&app, "/api/todos", r#"{"body":"buy milk"}"#).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(!json["id"].as_str().unwrap().is_empty());
    assert_eq!(json["body"], "buy milk");
    assert_eq!(json["completed"], false);
}

#[tokio::test]
async fn create_ignores_client_completed_flag() {
    let app = common::build_test_app();
    let response =
        post_json(&app, "/api/todos", r#"{"body":"sneaky","completed":true}"#).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["completed"], false);
}

#[tokio::test]
async fn create_with_empty_body_is_rejected_without_write() {
    let app = common::build_test_app();

    for payload in [r#"{"body":""}"#, r#"{}"#] {
        let response = post_json(&app, "/api/todos", payload).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Todo body cannot be empty");
    }

    assert!(list(&app).await.is_empty());
}

#[tokio::test]
async fn create_with_malformed_json_is_400() {
    let app = common::build_test_app();

    for payload in ["not json", r#"{"body":"#, r#"{"body":42}"#] {
        let response = post_json(&app, "/api/todos", payload).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "payload {payload:?}");
        let json = body_json(response).await;
        assert!(json["error"].is_string());
        assert_eq!(json["code"], "BAD_REQUEST");
    }

    assert!(list(&app).await.is_empty());
}

#[tokio::test]
async fn create_without_json_content_type_is_400() {
    let app = common::build_test_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/todos")
        .body(Body::from(r#"{"body":"buy milk"}"#))
        .unwrap();

    let response = send(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["error"].is_string());
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_on_empty_store_is_empty_array() {
    let app = common::build_test_app();
    let response = get(&app, "/api/todos").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

#[tokio::test]
async fn list_contains_every_created_todo() {
    let app = common::build_test_app();
    let mut ids = Vec::new();
    for body in ["one", "two", "three"] {
        ids.push(create(&app, body).await["id"].clone());
    }

    let todos = list(&app).await;
    assert_eq!(todos.len(), 3);
    for id in ids {
        assert!(todos.iter().any(|t| t["id"] == id));
    }
}

// ---------------------------------------------------------------------------
// Complete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn complete_is_idempotent() {
    let app = common::build_test_app();
    let id = create(&app, "walk dog").await["id"]
        .as_str()
        .unwrap()
        .to_string();

    for _ in 0..2 {
        let response = patch(&app, &format!("/api/todo/{id}")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!({ "success": true }));

        let todos = list(&app).await;
        assert_eq!(todos[0]["completed"], true);
    }
}

#[tokio::test]
async fn complete_unknown_or_malformed_id_is_400() {
    let app = common::build_test_app();
    create(&app, "untouched").await;

    let response = patch(&app, &format!("/api/todo/{MISSING_ID}")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Todo not found");

    let response = patch(&app, "/api/todo/not-an-id").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Invalid todo ID");

    let todos = list(&app).await;
    assert_eq!(todos[0]["completed"], false);
}

#[tokio::test]
async fn undecodable_path_id_is_json_400() {
    let app = common::build_test_app();
    create(&app, "untouched").await;

    for response in [
        patch(&app, "/api/todo/%FF").await,
        delete(&app, "/api/todo/%FF").await,
    ] {
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Invalid todo ID");
        assert_eq!(json["code"], "INVALID_ID");
    }

    let todos = list(&app).await;
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0]["completed"], false);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_removes_todo_from_list() {
    let app = common::build_test_app();
    let keep = create(&app, "keep").await;
    let gone = create(&app, "gone").await;
    let gone_id = gone["id"].as_str().unwrap();

    let response = delete(&app, &format!("/api/todo/{gone_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!({ "success": true }));

    let todos = list(&app).await;
    assert_eq!(todos, vec![keep]);

    // A second delete finds nothing.
    let response = delete(&app, &format!("/api/todo/{gone_id}")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_malformed_id_is_400_and_keeps_data() {
    let app = common::build_test_app();
    create(&app, "stay").await;

    let response = delete(&app, "/api/todo/12345").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_ID");

    assert_eq!(list(&app).await.len(), 1);
}

// ---------------------------------------------------------------------------
// Full lifecycle
// ---------------------------------------------------------------------------

#[tokio::test]
async fn crud_lifecycle() {
    let app = common::build_test_app();

    let created = create(&app, "buy milk").await;
    assert_eq!(created["completed"], false);
    let id = created["id"].as_str().unwrap().to_string();

    let response = patch(&app, &format!("/api/todo/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let todos = list(&app).await;
    let todo = todos.iter().find(|t| t["id"] == id.as_str()).unwrap();
    assert_eq!(todo["body"], "buy milk");
    assert_eq!(todo["completed"], true);

    let response = delete(&app, &format!("/api/todo/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    assert!(list(&app).await.iter().all(|t| t["id"] != id.as_str()));
}

// ---------------------------------------------------------------------------
// Store failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn store_failures_use_per_endpoint_status() {
    let app = common::build_test_app_with(Arc::new(common::FailingStore));

    let response = get(&app, "/api/todos").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Error fetching todos");

    let response = post_json(&app, "/api/todos", r#"{"body":"x"}"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Error creating todo");

    let response = patch(&app, &format!("/api/todo/{MISSING_ID}")).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["error"], "Error updating todo");

    let response = delete(&app, &format!("/api/todo/{MISSING_ID}")).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["error"], "Error deleting todo");
}

#[tokio::test]
async fn empty_body_is_rejected_before_reaching_store() {
    // The failing store would answer "Error creating todo" if it were called.
    let app = common::build_test_app_with(Arc::new(common::FailingStore));
    let response = post_json(&app, "/api/todos", r#"{"body":""}"#).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Todo body cannot be empty");
}
