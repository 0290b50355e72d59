//! Route definitions for todo items.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::todos;
use crate::state::AppState;

/// Todo routes, mounted under `/api`.
///
/// The collection and the single item use different nouns (`/todos` vs
/// `/todo/{id}`); existing clients depend on both paths.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/todos", get(todos::list_todos).post(todos::create_todo))
        .route(
            "/todo/{id}",
            patch(todos::complete_todo).delete(todos::delete_todo),
        )
}
