//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - JWT signing and token lifetime configuration
//! - `cache` - Token store backend and Redis configuration
//! - `environment` - Environment detection and logging configuration

pub mod auth;
pub mod cache;
pub mod environment;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{ConfigError, ConfigResult};

// Re-export commonly used types
pub use auth::{AuthConfig, JwtConfig};
pub use cache::{CacheConfig, TokenStoreBackend};
pub use environment::{Environment, LogFormat, LoggingConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Token store configuration
    #[serde(default)]
    pub cache: CacheConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Create a configuration around an explicit JWT secret, using
    /// environment-appropriate defaults for everything else
    pub fn with_secret(environment: Environment, secret: impl Into<String>) -> Self {
        Self {
            environment,
            auth: AuthConfig {
                jwt: JwtConfig::new(secret),
            },
            cache: CacheConfig::default(),
            logging: LoggingConfig::for_environment(environment),
        }
    }

    /// Load configuration from environment
    ///
    /// Fails when `JWT_SECRET` is missing or any variable cannot be parsed.
    pub fn from_env() -> ConfigResult<Self> {
        let environment = Environment::from_env();
        Ok(Self {
            environment,
            auth: AuthConfig::from_env()?,
            cache: CacheConfig::from_env()?,
            logging: LoggingConfig::from_env(environment)?,
        })
    }
}

/// Read an optional variable, treating empty values as unset
pub(crate) fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Read and parse an optional variable, falling back to `default`
pub(crate) fn env_parse<T: FromStr>(name: &str, default: T) -> ConfigResult<T> {
    match env_var(name) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
            var: name.to_string(),
            value: raw,
        }),
        None => Ok(default),
    }
}
