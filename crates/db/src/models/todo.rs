use sqlx::FromRow;
use todo_core::todo::Todo;
use todo_core::types::TodoId;

/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// A row from the `todos` table.
#[derive(Debug, Clone, FromRow)]
pub struct TodoRow {
    pub id: DbId,
    pub body: String,
    pub completed: bool,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Todo {
            id: TodoId::from(row.id),
            body: row.body,
            completed: row.completed,
        }
    }
}
