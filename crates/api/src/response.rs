//! Shared response body types for API handlers.

use serde::Serialize;

/// `{ "message": "..." }` body used by update, delete and id-parameter errors.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}
