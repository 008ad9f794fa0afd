//! Domain-specific error types and error handling.

mod types;

// Re-export all error families
pub use types::{AuthError, RoleError, TokenError};

use bms_shared::types::ApiResponse;
use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("{resource} not found.")]
    NotFound { resource: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error families
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Role(#[from] RoleError),
}

impl DomainError {
    /// Convenience constructor for validation failures
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation {
            message: message.into(),
        }
    }

    /// Convenience constructor for missing resources
    pub fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
        }
    }

    /// Convenience constructor for unexpected internal failures
    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }

    /// Fold this error into the caller-facing response envelope
    pub fn into_response<T>(self) -> ApiResponse<T> {
        ApiResponse::failure(self.to_string())
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

/// Wrap an operation's outcome in the uniform response envelope handed to
/// callers: the given message on success, the error's message on failure.
pub fn into_response<T>(
    result: DomainResult<T>,
    success_message: impl Into<String>,
) -> ApiResponse<T> {
    match result {
        Ok(data) => ApiResponse::success(success_message, data),
        Err(err) => err.into_response(),
    }
}
