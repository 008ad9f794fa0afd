//! The uniform API response envelope
//!
//! Every operation exposed by the core services resolves to this envelope:
//! a success flag, a human-readable message, optional payload, and optional
//! per-field error details. Responses are always complete values, never
//! partial.

use serde::{Deserialize, Serialize};

/// Standard response wrapper returned to callers of the core services
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the operation succeeded
    pub success: bool,

    /// Human-readable outcome message
    pub message: String,

    /// Response payload (present on success when the operation yields data)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Detailed error descriptions (present on failure when available)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response with a payload
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            errors: None,
        }
    }

    /// Create a successful response carrying only a message
    pub fn success_message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
            errors: None,
        }
    }

    /// Create a failure response
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            errors: None,
        }
    }

    /// Attach detailed error descriptions to a failure response
    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.errors = Some(errors);
        self
    }

    /// Check if the response is successful
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Extract the payload, consuming the response
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Map the payload to a different type
    pub fn map<U, F>(self, f: F) -> ApiResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ApiResponse {
            success: self.success,
            message: self.message,
            data: self.data.map(f),
            errors: self.errors,
        }
    }
}
