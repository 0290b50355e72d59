//! The todo entity and its create payload.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::error::CoreError;
use crate::types::TodoId;

/// Entity name used in error messages and log fields.
pub const TODO_ENTITY: &str = "todo";

/// Message returned when a todo is created without any text.
pub const EMPTY_BODY_MESSAGE: &str = "Todo body cannot be empty";

/// A single todo item as stored and as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub body: String,
    pub completed: bool,
}

/// Request payload for `POST /api/todos`.
///
/// A missing `body` deserializes to an empty string so it fails validation
/// with the same message as an explicit `""`. Any `completed` flag sent by
/// the client is ignored: new todos always start open.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateTodo {
    #[serde(default)]
    #[validate(length(min = 1, message = "Todo body cannot be empty"))]
    pub body: String,
}

impl CreateTodo {
    /// Check the payload, converting validator output into a [`CoreError`].
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate()
            .map_err(|errors| CoreError::Validation(first_message(&errors)))
    }
}

fn first_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| EMPTY_BODY_MESSAGE.to_string())
}
