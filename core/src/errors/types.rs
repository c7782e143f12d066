//! Error type definitions for token management and input validation

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Token-related errors
///
/// Signature/format failures and expiry are kept distinct so callers can
/// choose between rejecting the request and asking for re-authentication.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Malformed token or signature mismatch
    #[error("Invalid token")]
    InvalidToken,

    /// Current time is past the embedded expiry
    #[error("Token expired")]
    TokenExpired,

    /// Token is well-formed and unexpired but has been blacklisted
    #[error("Token revoked")]
    TokenRevoked,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// A single rejected field with its human-readable message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more fields failed their constraints
    #[error("Invalid fields: {}", join_violations(.0))]
    Fields(Vec<FieldViolation>),

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Scheduled time must be in the future")]
    ScheduleInPast,
}

impl ValidationError {
    /// Message recorded for `field`, if it was rejected
    pub fn message_for(&self, field: &str) -> Option<&str> {
        match self {
            ValidationError::Fields(violations) => violations
                .iter()
                .find(|v| v.field == field)
                .map(|v| v.message.as_str()),
            _ => None,
        }
    }
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
