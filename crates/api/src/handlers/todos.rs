//! Handlers for the todo list.
//!
//! List and create report store failures as 400, complete and delete as 500.
//! Unknown or malformed ids are always 400.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use todo_core::todo::{CreateTodo, Todo};
use todo_core::types::TodoId;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::response::SuccessResponse;
use crate::state::AppState;

/// GET /api/todos
///
/// Every todo, in whatever order the store returns them.
pub async fn list_todos(State(state): State<AppState>) -> AppResult<Json<Vec<Todo>>> {
    let todos = state
        .store
        .find_all()
        .await
        .map_err(AppError::store(StatusCode::BAD_REQUEST, "Error fetching todos"))?;

    Ok(Json(todos))
}

/// POST /api/todos
///
/// Create an open todo from `{ "body": "..." }` and return it with its id.
pub async fn create_todo(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateTodo>,
) -> AppResult<Json<Todo>> {
    input.check()?;

    let todo = state
        .store
        .insert(&input.body)
        .await
        .map_err(AppError::store(StatusCode::BAD_REQUEST, "Error creating todo"))?;

    tracing::info!(todo_id = %todo.id, backend = state.store.backend(), "Todo created");

    Ok(Json(todo))
}

/// PATCH /api/todo/{id}
///
/// Mark a todo completed. There is no way back to open; repeating the call
/// is harmless.
pub async fn complete_todo(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> AppResult<Json<SuccessResponse>> {
    let id = TodoId::from(id);

    state
        .store
        .update_completed(&id)
        .await
        .map_err(AppError::store(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Error updating todo",
        ))?;

    tracing::info!(todo_id = %id, "Todo completed");

    Ok(Json(SuccessResponse::ok()))
}

/// DELETE /api/todo/{id}
pub async fn delete_todo(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> AppResult<Json<SuccessResponse>> {
    let id = TodoId::from(id);

    state
        .store
        .delete_by_id(&id)
        .await
        .map_err(AppError::store(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Error deleting todo",
        ))?;

    tracing::info!(todo_id = %id, "Todo deleted");

    Ok(Json(SuccessResponse::ok()))
}
