#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use todo_core::todo::Todo;
use todo_core::types::TodoId;
use todo_db::store::{MemoryTodoStore, StoreError, StoreResult, TodoStore};
use tower::ServiceExt;

use todo_api::config::{ServerConfig, StoreBackend};
use todo_api::router::build_app_router;
use todo_api::state::AppState;

pub const TEST_ORIGIN: &str = "http://localhost:5174";

/// Build a test `ServerConfig` with safe defaults and the memory backend.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: [127, 0, 0, 1].into(),
        port: 0,
        store: StoreBackend::Memory,
        cors_origin: HeaderValue::from_static(TEST_ORIGIN),
        request_timeout_secs: 30,
    }
}

/// The full application router over the given store.
pub fn build_test_app_with(store: Arc<dyn TodoStore>) -> Router {
    build_app_router(AppState::new(store, test_config()))
}

/// The full application router over a fresh in-memory store.
pub fn build_test_app() -> Router {
    build_test_app_with(Arc::new(MemoryTodoStore::new()))
}

/// A store whose every call fails as if the database were down.
pub struct FailingStore;

fn down() -> StoreError {
    StoreError::Database(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl TodoStore for FailingStore {
    fn backend(&self) -> &'static str {
        "failing"
    }

    async fn insert(&self, _body: &str) -> StoreResult<Todo> {
        Err(down())
    }

    async fn find_all(&self) -> StoreResult<Vec<Todo>> {
        Err(down())
    }

    async fn find_by_id(&self, _id: &TodoId) -> StoreResult<Option<Todo>> {
        Err(down())
    }

    async fn update_completed(&self, _id: &TodoId) -> StoreResult<()> {
        Err(down())
    }

    async fn delete_by_id(&self, _id: &TodoId) -> StoreResult<()> {
        Err(down())
    }

    async fn health_check(&self) -> StoreResult<()> {
        Err(down())
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn patch(app: &Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::PATCH)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: &Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// POST a todo and return the created record.
pub async fn create(app: &Router, body: &str) -> serde_json::Value {
    let payload = serde_json::json!({ "body": body }).to_string();
    let response = post_json(app, "/api/todos", &payload).await;
    assert_eq!(response.status(), 200);
    body_json(response).await
}

pub async fn list(app: &Router) -> Vec<serde_json::Value> {
    let response = get(app, "/api/todos").await;
    assert_eq!(response.status(), 200);
    serde_json::from_value(body_json(response).await).unwrap()
}
