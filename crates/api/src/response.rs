//! Shared response bodies for API handlers.

use serde::Serialize;

/// `{ "success": true }` acknowledgement for mutations that do not echo
/// the record back.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
