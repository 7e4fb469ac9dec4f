//! Shared response body types for API handlers.

use serde::Serialize;

/// Plain acknowledgement body, e.g. `{ "message": "Success." }`.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub const SUCCESS: MessageResponse = MessageResponse {
        message: "Success.",
    };
}
