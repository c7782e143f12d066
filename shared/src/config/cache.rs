//! Token store configuration module

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{env_parse, env_var};
use crate::errors::{ConfigError, ConfigResult};

/// Backend holding refresh-token and blacklist state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenStoreBackend {
    /// Process-local concurrent map (single node)
    Memory,
    /// Shared Redis instance with native key expiry
    Redis,
}

impl Default for TokenStoreBackend {
    fn default() -> Self {
        TokenStoreBackend::Memory
    }
}

impl fmt::Display for TokenStoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenStoreBackend::Memory => write!(f, "memory"),
            TokenStoreBackend::Redis => write!(f, "redis"),
        }
    }
}

impl FromStr for TokenStoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => Ok(TokenStoreBackend::Memory),
            "redis" => Ok(TokenStoreBackend::Redis),
            _ => Err(format!("Invalid token store backend: {}", s)),
        }
    }
}

/// Token store and Redis cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Which backend stores token state
    #[serde(default)]
    pub backend: TokenStoreBackend,

    /// Redis connection URL
    #[serde(default = "default_url")]
    pub url: String,

    /// Prefix applied to every key written by the token store
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,

    /// How often expired entries are purged, in seconds
    #[serde(default = "default_cleanup_interval")]
    pub cleanup_interval: u64,

    /// Maximum retry attempts for Redis operations
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Base delay between Redis retries in milliseconds
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: TokenStoreBackend::default(),
            url: default_url(),
            key_prefix: default_key_prefix(),
            cleanup_interval: default_cleanup_interval(),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

impl CacheConfig {
    /// Create a Redis-backed configuration for the given URL
    pub fn redis(url: impl Into<String>) -> Self {
        Self {
            backend: TokenStoreBackend::Redis,
            url: url.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> ConfigResult<Self> {
        let backend = match env_var("TOKEN_STORE") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                var: "TOKEN_STORE".to_string(),
                value: raw,
            })?,
            None => TokenStoreBackend::default(),
        };

        Ok(Self {
            backend,
            url: env_var("REDIS_URL").unwrap_or_else(default_url),
            key_prefix: env_var("TOKEN_STORE_PREFIX").unwrap_or_else(default_key_prefix),
            cleanup_interval: env_parse("TOKEN_CLEANUP_INTERVAL", default_cleanup_interval())?,
            max_retries: env_parse("REDIS_MAX_RETRIES", default_max_retries())?,
            retry_delay_ms: env_parse("REDIS_RETRY_DELAY_MS", default_retry_delay_ms())?,
        })
    }

    /// Build a namespaced key
    pub fn namespaced(&self, key: &str) -> String {
        if self.key_prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}:{}", self.key_prefix, key)
        }
    }
}

fn default_url() -> String {
    String::from("redis://localhost:6379")
}

fn default_key_prefix() -> String {
    String::from("legalease")
}

fn default_cleanup_interval() -> u64 {
    300 // 5 minutes
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.backend, TokenStoreBackend::Memory);
        assert_eq!(config.url, "redis://localhost:6379");
        assert_eq!(config.cleanup_interval, 300);
    }

    #[test]
    fn test_backend_from_str() {
        assert_eq!("redis".parse::<TokenStoreBackend>().unwrap(), TokenStoreBackend::Redis);
        assert_eq!("Memory".parse::<TokenStoreBackend>().unwrap(), TokenStoreBackend::Memory);
        assert!("postgres".parse::<TokenStoreBackend>().is_err());
    }

    #[test]
    fn test_namespaced_keys() {
        let config = CacheConfig::redis("redis://cache:6379");
        assert_eq!(config.namespaced("refresh:abc"), "legalease:refresh:abc");

        let bare = CacheConfig {
            key_prefix: String::new(),
            ..Default::default()
        };
        assert_eq!(bare.namespaced("refresh:abc"), "refresh:abc");
    }
}
