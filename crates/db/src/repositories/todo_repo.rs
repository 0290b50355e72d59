//! Repository for the `todos` table.

use sqlx::PgPool;

use crate::models::todo::{DbId, TodoRow};

/// Column list for `todos` queries.
const COLUMNS: &str = "id, body, completed";

/// Provides data access for todo rows.
pub struct TodoRepo;

impl TodoRepo {
    /// Insert a new, open todo and return the stored row.
    pub async fn create(pool: &PgPool, body: &str) -> Result<TodoRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO todos (body, completed) VALUES ($1, FALSE) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TodoRow>(&query)
            .bind(body)
            .fetch_one(pool)
            .await
    }

    /// List every todo. No ordering is promised beyond the table's own.
    pub async fn list(pool: &PgPool) -> Result<Vec<TodoRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos");
        sqlx::query_as::<_, TodoRow>(&query).fetch_all(pool).await
    }

    /// Find a todo by id. Returns `None` if no row matches.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TodoRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE id = $1");
        sqlx::query_as::<_, TodoRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Set `completed = TRUE`. Returns `true` if a row matched.
    ///
    /// A todo that is already completed still counts as matched, so repeat
    /// calls succeed.
    pub async fn mark_completed(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE todos SET completed = TRUE WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a todo. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
