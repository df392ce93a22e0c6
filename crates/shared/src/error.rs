//! Application-wide error types.

use thiserror::Error;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bearer token missing or not matching the capability's token.
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// Request body failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Unauthorized(_) => 401,
            Self::Validation(_) => 400,
            Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthorized(_) => "unauthorized",
            Self::Validation(_) => "validation_error",
            Self::Internal(_) => "internal_error",
        }
    }

    /// Message safe to hand back to a client.
    ///
    /// Authorization and internal failures never echo their detail.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::Unauthorized(_) => "Unauthorized".to_string(),
            Self::Validation(msg) => msg.clone(),
            Self::Internal(_) => "An error occurred".to_string(),
        }
    }
}
