//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the LegalEase backend.
//! It provides concrete implementations of the ports defined in `le_core`.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Cache**: Redis client and the Redis-backed token store
//! - **Repositories**: single-node in-memory user, lawyer and consultation stores
//! - **Telemetry**: `tracing` subscriber setup driven by `LoggingConfig`
//! - **Bootstrap**: wiring of configuration, token store and token service

use le_core::errors::DomainError;
use le_shared::ConfigError;

/// Bootstrap module - configuration loading and service wiring
pub mod bootstrap;

/// Cache module - Redis client and token store
pub mod cache;

/// Repositories module - in-memory persistence
pub mod repositories;

/// Telemetry module - tracing subscriber initialisation
pub mod telemetry;

pub use bootstrap::{
    build_token_service, build_token_store, initialize, initialize_with, AppContext,
    SharedTokenService,
};
pub use telemetry::init_tracing;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error raised by a core service during wiring
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}

impl From<ConfigError> for InfrastructureError {
    fn from(err: ConfigError) -> Self {
        InfrastructureError::Config(err.to_string())
    }
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        match err {
            InfrastructureError::Domain(inner) => inner,
            other => DomainError::Storage {
                message: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_error_maps_to_storage() {
        let redis_err = redis::RedisError::from((redis::ErrorKind::IoError, "connection reset"));
        let domain: DomainError = InfrastructureError::from(redis_err).into();

        match domain {
            DomainError::Storage { message } => assert!(message.contains("connection reset")),
            other => panic!("Expected Storage error, got {:?}", other),
        }
    }

    #[test]
    fn test_domain_error_passes_through() {
        let domain: DomainError = InfrastructureError::Domain(DomainError::Unauthorized).into();
        assert!(matches!(domain, DomainError::Unauthorized));
    }

    #[test]
    fn test_config_error_conversion() {
        let err: InfrastructureError = ConfigError::Missing("JWT_SECRET".to_string()).into();
        assert!(err.to_string().contains("JWT_SECRET"));
    }
}
