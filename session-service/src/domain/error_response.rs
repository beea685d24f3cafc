use serde::{Deserialize, Serialize};

/// Uniform failure envelope: `{ "success": false, "message": "..." }`.
#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
