pub mod health;
pub mod todos;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /todos          GET list, POST create
/// /todo/{id}      PATCH complete, DELETE remove
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(todos::router())
}
