//! Shared utilities and common types for the LegalEase server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Configuration error types
//! - Utility functions (email validation)

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CacheConfig, Environment, JwtConfig, LogFormat, LoggingConfig,
    TokenStoreBackend,
};
pub use errors::{ConfigError, ConfigResult};
pub use utils::validation;
