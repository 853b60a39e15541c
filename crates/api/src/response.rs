//! Shared response body types for API handlers.
//!
//! Reads return the serialized entity directly; writes answer with a
//! [`MessageResponse`] confirming what changed.

use serde::Serialize;

/// `{ "message": "..." }` confirmation body for create, update and delete.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
