use crate::types::TodoId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: TodoId },

    #[error("Invalid {entity} id: {id:?}")]
    InvalidId { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),
}
