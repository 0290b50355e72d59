//! Startup-time construction of the configured [`TodoStore`].

use std::sync::Arc;

use anyhow::Context;
use todo_db::store::{MemoryTodoStore, PgTodoStore, TodoStore};

use crate::config::StoreBackend;

/// Build the store named by the configuration.
///
/// For PostgreSQL this opens the pool and applies migrations. Either step
/// failing is fatal to startup.
pub async fn connect(backend: &StoreBackend) -> anyhow::Result<Arc<dyn TodoStore>> {
    match backend {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; todos will not survive a restart");
            Ok(Arc::new(MemoryTodoStore::new()))
        }
        StoreBackend::Postgres {
            database_url,
            max_connections,
        } => {
            let pool = todo_db::create_pool(database_url, *max_connections)
                .await
                .context("Failed to connect to database")?;
            tracing::info!(max_connections, "Database connection pool created");

            todo_db::run_migrations(&pool)
                .await
                .context("Failed to run database migrations")?;
            tracing::info!("Database migrations applied");

            Ok(Arc::new(PgTodoStore::new(pool)))
        }
    }
}
