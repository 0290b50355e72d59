//! The storage seam between HTTP handlers and a concrete database.

mod memory;
mod postgres;

use async_trait::async_trait;
use todo_core::error::CoreError;
use todo_core::todo::{Todo, TODO_ENTITY};
use todo_core::types::TodoId;

pub use memory::MemoryTodoStore;
pub use postgres::PgTodoStore;

/// Errors returned by a [`TodoStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A malformed or unknown id. Callers treat these as client errors.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The backing database failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    pub fn not_found(id: &TodoId) -> Self {
        Self::Core(CoreError::NotFound {
            entity: TODO_ENTITY,
            id: id.clone(),
        })
    }

    pub fn invalid_id(id: &TodoId) -> Self {
        Self::Core(CoreError::InvalidId {
            entity: TODO_ENTITY,
            id: id.as_str().to_owned(),
        })
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence operations for todo items.
///
/// Implementations validate ids in their own format and report malformed ones
/// as [`CoreError::InvalidId`] before touching storage. Unknown ids on
/// mutation are [`CoreError::NotFound`].
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Short backend name for logs.
    fn backend(&self) -> &'static str;

    /// Insert a new todo with `completed = false` and a store-issued id.
    async fn insert(&self, body: &str) -> StoreResult<Todo>;

    /// Every stored todo, unfiltered.
    async fn find_all(&self) -> StoreResult<Vec<Todo>>;

    /// Look up a single todo.
    async fn find_by_id(&self, id: &TodoId) -> StoreResult<Option<Todo>>;

    /// Set `completed = true`. Succeeds again on an already completed todo.
    async fn update_completed(&self, id: &TodoId) -> StoreResult<()>;

    /// Remove a todo.
    async fn delete_by_id(&self, id: &TodoId) -> StoreResult<()>;

    /// Confirm the backend is reachable.
    async fn health_check(&self) -> StoreResult<()>;
}
