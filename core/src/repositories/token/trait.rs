//! Token store trait defining the key-value capability behind token state.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::errors::DomainError;

/// Key-value store with per-entry expiry holding refresh-token and
/// blacklist state
///
/// Keys are already hashed and namespaced by the token service; stores never
/// see raw token strings. Every entry carries a TTL and must read as absent
/// once that TTL has elapsed.
///
/// # Example
/// ```no_run
/// # use std::time::Duration;
/// # use le_core::repositories::{InMemoryTokenStore, TokenStore};
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let store = InMemoryTokenStore::new();
/// store.put("refresh:abc", "user-id", Duration::from_secs(60)).await?;
/// assert_eq!(store.get("refresh:abc").await?.as_deref(), Some("user-id"));
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Insert or overwrite `key` with `value`, expiring after `ttl`
    ///
    /// # Arguments
    /// * `key` - Namespaced store key
    /// * `value` - Value to associate with the key
    /// * `ttl` - Lifetime of the entry
    async fn put(&self, key: &str, value: &str, ttl: Duration) -> Result<(), DomainError>;

    /// Look up a live entry
    ///
    /// # Returns
    /// * `Ok(Some(value))` - Entry present and unexpired
    /// * `Ok(None)` - Never written, deleted, or expired
    /// * `Err(DomainError)` - Backend failure
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Remove an entry
    ///
    /// # Returns
    /// * `Ok(true)` - A live entry was removed
    /// * `Ok(false)` - Nothing to remove
    async fn delete(&self, key: &str) -> Result<bool, DomainError>;

    /// Remove an entry and return its value, if it was live
    ///
    /// Of several concurrent callers for the same key, at most one receives
    /// the value. The default pairs `get` with `delete` and hands the value
    /// only to the caller whose `delete` removed the entry; backends with an
    /// atomic read-and-delete should override it.
    async fn take(&self, key: &str) -> Result<Option<String>, DomainError> {
        let Some(value) = self.get(key).await? else {
            return Ok(None);
        };
        Ok(if self.delete(key).await? { Some(value) } else { None })
    }

    /// Whether a live entry exists for `key`
    async fn exists(&self, key: &str) -> Result<bool, DomainError> {
        Ok(self.get(key).await?.is_some())
    }

    /// Drop expired entries eagerly, returning how many were removed
    ///
    /// Backends with native expiry keep the default, which removes nothing.
    async fn purge_expired(&self) -> Result<usize, DomainError> {
        Ok(0)
    }
}

#[async_trait]
impl<T: TokenStore + ?Sized> TokenStore for Arc<T> {
    async fn put(&self, key: &str, value: &str, ttl: Duration) -> Result<(), DomainError> {
        (**self).put(key, value, ttl).await
    }

    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        (**self).get(key).await
    }

    async fn delete(&self, key: &str) -> Result<bool, DomainError> {
        (**self).delete(key).await
    }

    async fn take(&self, key: &str) -> Result<Option<String>, DomainError> {
        (**self).take(key).await
    }

    async fn exists(&self, key: &str) -> Result<bool, DomainError> {
        (**self).exists(key).await
    }

    async fn purge_expired(&self) -> Result<usize, DomainError> {
        (**self).purge_expired().await
    }
}
