//! Authentication configuration

use serde::{Deserialize, Serialize};

use super::{env_parse, env_var};
use crate::errors::{ConfigError, ConfigResult};

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Shared HMAC secret used to sign access tokens
    pub secret: String,

    /// Access token expiry time in seconds
    #[serde(default = "default_access_token_expiry")]
    pub access_token_expiry: i64,

    /// Refresh token expiry time in seconds
    #[serde(default = "default_refresh_token_expiry")]
    pub refresh_token_expiry: i64,

    /// Algorithm for JWT signing (default: HS256)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    /// Clock skew tolerated when checking expiry, in seconds
    #[serde(default)]
    pub leeway: u64,
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            access_token_expiry: default_access_token_expiry(),
            refresh_token_expiry: default_refresh_token_expiry(),
            algorithm: default_algorithm(),
            leeway: 0,
        }
    }

    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry = minutes * 60;
        self
    }

    /// Set refresh token expiry in days
    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_token_expiry = days * 86400;
        self
    }

    /// Load from `JWT_*` environment variables. `JWT_SECRET` is required.
    pub fn from_env() -> ConfigResult<Self> {
        let secret = env_var("JWT_SECRET")
            .ok_or_else(|| ConfigError::Missing("JWT_SECRET".to_string()))?;

        Ok(Self {
            secret,
            access_token_expiry: env_parse(
                "JWT_ACCESS_TOKEN_EXPIRY",
                default_access_token_expiry(),
            )?,
            refresh_token_expiry: env_parse(
                "JWT_REFRESH_TOKEN_EXPIRY",
                default_refresh_token_expiry(),
            )?,
            algorithm: env_var("JWT_ALGORITHM").unwrap_or_else(default_algorithm),
            leeway: env_parse("JWT_LEEWAY", 0)?,
        })
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> ConfigResult<Self> {
        Ok(Self {
            jwt: JwtConfig::from_env()?,
        })
    }

    /// Get access token expiry in seconds
    pub fn access_token_expiry_seconds(&self) -> i64 {
        self.jwt.access_token_expiry
    }

    /// Get refresh token expiry in seconds
    pub fn refresh_token_expiry_seconds(&self) -> i64 {
        self.jwt.refresh_token_expiry
    }
}

fn default_access_token_expiry() -> i64 {
    3600 // 1 hour
}

fn default_refresh_token_expiry() -> i64 {
    604800 // 7 days
}

fn default_algorithm() -> String {
    String::from("HS256")
}
