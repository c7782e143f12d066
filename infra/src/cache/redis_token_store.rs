//! Token store backed by Redis key expiry.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use le_core::errors::DomainError;
use le_core::repositories::TokenStore;
use le_shared::CacheConfig;

use super::redis_client::RedisClient;
use crate::InfrastructureError;

/// Shared token store for multi-instance deployments
///
/// Keys are namespaced with the configured prefix; expiry is delegated to
/// Redis, so `purge_expired` keeps the no-op default.
#[derive(Clone)]
pub struct RedisTokenStore {
    client: RedisClient,
    config: CacheConfig,
}

impl RedisTokenStore {
    /// Wrap an existing client
    pub fn new(client: RedisClient, config: CacheConfig) -> Self {
        Self { client, config }
    }

    /// Connect to the Redis instance named in `config`
    pub async fn connect(config: CacheConfig) -> Result<Self, InfrastructureError> {
        let client = RedisClient::new(&config).await?;
        Ok(Self::new(client, config))
    }

    /// The underlying client
    pub fn client(&self) -> &RedisClient {
        &self.client
    }

    fn key(&self, key: &str) -> String {
        self.config.namespaced(key)
    }
}

/// Whole seconds for `SET EX`, rounding partial seconds up
pub(crate) fn expiry_seconds(ttl: Duration) -> u64 {
    let secs = ttl.as_secs();
    if ttl.subsec_nanos() > 0 {
        secs.saturating_add(1)
    } else {
        secs
    }
}

#[async_trait]
impl TokenStore for RedisTokenStore {
    async fn put(&self, key: &str, value: &str, ttl: Duration) -> Result<(), DomainError> {
        let key = self.key(key);
        let seconds = expiry_seconds(ttl);

        // SET EX rejects zero; an entry with no lifetime is simply absent
        if seconds == 0 {
            debug!("Zero TTL for '{}', removing instead", key);
            self.client.delete(&key).await?;
            return Ok(());
        }

        self.client.set_with_expiry(&key, value, seconds).await?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.client.get(&self.key(key)).await?)
    }

    async fn delete(&self, key: &str) -> Result<bool, DomainError> {
        Ok(self.client.delete(&self.key(key)).await?)
    }

    async fn take(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.client.get_del(&self.key(key)).await?)
    }

    async fn exists(&self, key: &str) -> Result<bool, DomainError> {
        Ok(self.client.exists(&self.key(key)).await?)
    }
}
