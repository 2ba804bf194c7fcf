//! Response types for the player/engine request pattern

use serde::{Deserialize, Serialize};

/// Error classification codes shared by both sides of the boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Draft rules failed; details map field names to messages
    ValidationFailed,
    /// No scenario under the requested id (reserved slots included)
    NotFound,
    /// The bundled catalog could not be loaded. Engine startup treats a
    /// load failure as fatal, so the engine itself never emits this; it is
    /// reserved for the host shell reporting a failed boot to the screens.
    CatalogUnavailable,
    /// Anything else
    Internal,
}

/// Result of a request operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResponseResult {
    /// Operation succeeded
    Success {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        data: Option<serde_json::Value>,
    },
    /// Operation failed
    Error { code: ErrorCode, message: String },
    /// Forward-compatibility fallback for newer response kinds
    #[serde(other)]
    Unknown,
}

impl ResponseResult {
    /// Create a success response with data
    pub fn success<T: Serialize>(data: T) -> Self {
        ResponseResult::Success {
            data: serde_json::to_value(data).ok(),
        }
    }

    /// Create a success response without data
    pub fn success_empty() -> Self {
        ResponseResult::Success { data: None }
    }

    /// Create an error response
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        ResponseResult::Error {
            code,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ResponseResult::Success { .. })
    }
}
