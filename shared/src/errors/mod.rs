//! Shared error types

use thiserror::Error;

/// Errors raised while loading configuration from the environment
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is not set
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    /// A variable is set but cannot be parsed
    #[error("Invalid value for {var}: {value}")]
    Invalid { var: String, value: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
