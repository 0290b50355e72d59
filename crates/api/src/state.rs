use std::sync::Arc;

use todo_db::store::TodoStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The todo store selected at startup.
    pub store: Arc<dyn TodoStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn TodoStore>, config: ServerConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}
