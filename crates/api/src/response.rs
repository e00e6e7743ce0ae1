//! Shared response body types for API handlers.

use serde::Serialize;

/// `{ "message": ... }` body used by the greeting and delete endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
