use async_trait::async_trait;
use todo_core::todo::Todo;
use todo_core::types::TodoId;

use crate::models::todo::DbId;
use crate::repositories::TodoRepo;
use crate::store::{StoreError, StoreResult, TodoStore};
use crate::DbPool;

/// [`TodoStore`] backed by the `todos` table.
///
/// Ids are BIGSERIAL values rendered as decimal strings.
#[derive(Clone)]
pub struct PgTodoStore {
    pool: DbPool,
}

impl PgTodoStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Parse an API id into a row id. Only positive integers can exist.
fn parse_id(id: &TodoId) -> StoreResult<DbId> {
    match id.as_str().parse::<DbId>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(StoreError::invalid_id(id)),
    }
}

#[async_trait]
impl TodoStore for PgTodoStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn insert(&self, body: &str) -> StoreResult<Todo> {
        let row = TodoRepo::create(&self.pool, body).await?;
        Ok(row.into())
    }

    async fn find_all(&self) -> StoreResult<Vec<Todo>> {
        let rows = TodoRepo::list(&self.pool).await?;
        Ok(rows.into_iter().map(Todo::from).collect())
    }

    async fn find_by_id(&self, id: &TodoId) -> StoreResult<Option<Todo>> {
        let db_id = parse_id(id)?;
        let row = TodoRepo::find_by_id(&self.pool, db_id).await?;
        Ok(row.map(Todo::from))
    }

    async fn update_completed(&self, id: &TodoId) -> StoreResult<()> {
        let db_id = parse_id(id)?;
        if TodoRepo::mark_completed(&self.pool, db_id).await? {
            Ok(())
        } else {
            Err(StoreError::not_found(id))
        }
    }

    async fn delete_by_id(&self, id: &TodoId) -> StoreResult<()> {
        let db_id = parse_id(id)?;
        if TodoRepo::delete(&self.pool, db_id).await? {
            Ok(())
        } else {
            Err(StoreError::not_found(id))
        }
    }

    async fn health_check(&self) -> StoreResult<()> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}
