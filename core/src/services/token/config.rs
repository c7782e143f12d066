//! Configuration for the token service

use jsonwebtoken::Algorithm;
use le_shared::JwtConfig;
use std::time::Duration;

use crate::domain::entities::token::{ACCESS_TOKEN_EXPIRY_SECONDS, REFRESH_TOKEN_EXPIRY_SECONDS};
use crate::errors::DomainError;

/// Configuration for the token service
///
/// There is no compiled-in secret; callers build this from `JwtConfig`
/// (which requires `JWT_SECRET`) or pass one explicitly.
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Shared HMAC signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm (HMAC family only)
    pub algorithm: Algorithm,
    /// Access token lifetime in seconds
    pub access_token_ttl_seconds: i64,
    /// Refresh token lifetime in seconds
    pub refresh_token_ttl_seconds: i64,
    /// Clock skew tolerated on expiry checks, in seconds
    pub leeway_seconds: u64,
}

impl TokenServiceConfig {
    /// HS256 configuration with default lifetimes and no leeway
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
            access_token_ttl_seconds: ACCESS_TOKEN_EXPIRY_SECONDS,
            refresh_token_ttl_seconds: REFRESH_TOKEN_EXPIRY_SECONDS,
            leeway_seconds: 0,
        }
    }

    /// Build from the shared JWT configuration
    ///
    /// # Errors
    ///
    /// `DomainError::Internal` if the algorithm name is not recognised
    pub fn from_jwt_config(jwt: &JwtConfig) -> Result<Self, DomainError> {
        let algorithm = jwt
            .algorithm
            .trim()
            .to_uppercase()
            .parse::<Algorithm>()
            .map_err(|_| DomainError::Internal {
                message: format!("Unsupported JWT algorithm: {}", jwt.algorithm),
            })?;

        Ok(Self {
            jwt_secret: jwt.secret.clone(),
            algorithm,
            access_token_ttl_seconds: jwt.access_token_expiry,
            refresh_token_ttl_seconds: jwt.refresh_token_expiry,
            leeway_seconds: jwt.leeway,
        })
    }

    /// Override the access token lifetime
    pub fn with_access_ttl_seconds(mut self, seconds: i64) -> Self {
        self.access_token_ttl_seconds = seconds;
        self
    }

    /// Override the refresh token lifetime
    pub fn with_refresh_ttl_seconds(mut self, seconds: i64) -> Self {
        self.refresh_token_ttl_seconds = seconds;
        self
    }

    /// Override the validation leeway
    pub fn with_leeway_seconds(mut self, seconds: u64) -> Self {
        self.leeway_seconds = seconds;
        self
    }

    /// Access token lifetime as a store TTL
    pub fn access_ttl(&self) -> Duration {
        Duration::from_secs(self.access_token_ttl_seconds.max(0) as u64)
    }

    /// Refresh token lifetime as a store TTL
    pub fn refresh_ttl(&self) -> Duration {
        Duration::from_secs(self.refresh_token_ttl_seconds.max(0) as u64)
    }

    /// Reject configurations the service cannot sign or validate with
    pub(crate) fn validate(&self) -> Result<(), DomainError> {
        if self.jwt_secret.is_empty() {
            return Err(DomainError::Internal {
                message: "JWT secret must not be empty".to_string(),
            });
        }
        if !matches!(
            self.algorithm,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
        ) {
            return Err(DomainError::Internal {
                message: format!("JWT algorithm {:?} is not an HMAC algorithm", self.algorithm),
            });
        }
        if self.access_token_ttl_seconds <= 0 || self.refresh_token_ttl_seconds <= 0 {
            return Err(DomainError::Internal {
                message: "Token lifetimes must be positive".to_string(),
            });
        }
        Ok(())
    }
}
