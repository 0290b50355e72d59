use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use todo_core::error::CoreError;
use todo_core::todo::TODO_ENTITY;
use todo_db::store::StoreError;

/// Application-level error type for HTTP handlers.
///
/// Every variant renders as `{ "error": ..., "code": ... }`. Client mistakes
/// are always 400; store failures carry the status the handler chose for
/// them and never leak the underlying cause.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `todo_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The store failed while serving the request.
    #[error("{message}: {source}")]
    Store {
        status: StatusCode,
        message: &'static str,
        source: StoreError,
    },

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Build a `map_err` adapter for store calls.
    ///
    /// Id problems reported by the store stay client errors; anything else
    /// becomes `status` with the generic `message`.
    pub fn store(status: StatusCode, message: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |err| match err {
            StoreError::Core(core) => AppError::Core(core),
            source => AppError::Store {
                status,
                message,
                source,
            },
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Core(CoreError::InvalidId {
            entity: TODO_ENTITY,
            id: rejection.body_text(),
        })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => {
                    (StatusCode::BAD_REQUEST, "NOT_FOUND", "Todo not found".to_string())
                }
                CoreError::InvalidId { .. } => {
                    (StatusCode::BAD_REQUEST, "INVALID_ID", "Invalid todo ID".to_string())
                }
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
            },

            // --- Store failures ---
            AppError::Store {
                status,
                message,
                source,
            } => {
                tracing::error!(error = %source, status = status.as_u16(), "{message}");
                (*status, "STORE_ERROR", (*message).to_string())
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
