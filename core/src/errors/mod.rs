//! Domain-specific error types and error handling.

mod types;


// Re-export all error types
pub use types::{FieldViolation, TokenError, ValidationError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Business rule violation: {message}")]
    BusinessRule { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

impl DomainError {
    /// Shorthand for a `NotFound` error on the named resource
    pub fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
        }
    }

    /// Whether the caller should re-authenticate rather than retry or report
    pub fn requires_reauthentication(&self) -> bool {
        matches!(
            self,
            DomainError::Unauthorized
                | DomainError::Token(TokenError::TokenExpired)
                | DomainError::Token(TokenError::TokenRevoked)
        )
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
