//! Integration tests for the Redis token store
//!
//! These tests require a running Redis instance to execute.
//! Run with: cargo test -p le_infra --test redis_token_store -- --ignored

use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

use le_core::domain::entities::{User, UserRole};
use le_core::repositories::TokenStore;
use le_core::services::{TokenService, TokenServiceConfig};
use le_infra::cache::RedisTokenStore;
use le_shared::CacheConfig;

fn test_config() -> CacheConfig {
    let mut config = CacheConfig::redis(
        std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string()),
    );
    config.key_prefix = format!("legalease-test-{}", Uuid::new_v4());
    config
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_put_get_delete() {
    let store = RedisTokenStore::connect(test_config()).await.unwrap();

    store
        .put("refresh:abc", "user-1", Duration::from_secs(60))
        .await
        .unwrap();
    assert_eq!(store.get("refresh:abc").await.unwrap().as_deref(), Some("user-1"));
    assert!(store.exists("refresh:abc").await.unwrap());

    assert!(store.delete("refresh:abc").await.unwrap());
    assert!(!store.delete("refresh:abc").await.unwrap());
    assert_eq!(store.get("refresh:abc").await.unwrap(), None);
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_take_is_single_use() {
    let store = RedisTokenStore::connect(test_config()).await.unwrap();
    store
        .put("refresh:once", "user-1", Duration::from_secs(60))
        .await
        .unwrap();

    let (first, second) = tokio::join!(store.take("refresh:once"), store.take("refresh:once"));
    let taken: Vec<String> = [first.unwrap(), second.unwrap()].into_iter().flatten().collect();

    assert_eq!(taken, vec!["user-1".to_string()]);
    assert!(!store.exists("refresh:once").await.unwrap());
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_keys_are_prefixed_and_expire() {
    let config = test_config();
    let prefix = config.key_prefix.clone();
    let store = RedisTokenStore::connect(config).await.unwrap();

    store
        .put("blacklist:abc", "1", Duration::from_secs(60))
        .await
        .unwrap();

    let ttl = store
        .client()
        .ttl(&format!("{}:blacklist:abc", prefix))
        .await
        .unwrap();
    assert!(matches!(ttl, Some(t) if t > 0 && t <= 60));

    store
        .put("blacklist:short", "1", Duration::from_secs(1))
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(2100)).await;
    assert!(!store.exists("blacklist:short").await.unwrap());
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_token_service_over_redis() {
    let store: Arc<dyn TokenStore> =
        Arc::new(RedisTokenStore::connect(test_config()).await.unwrap());
    let service = TokenService::new(store, TokenServiceConfig::new("redis-test-secret")).unwrap();
    let user = User::new("Alice", "alice@example.com", UserRole::Client).unwrap();

    let pair = service.issue_token_pair(&user).await.unwrap();
    assert_eq!(
        service.resolve_refresh_token(&pair.refresh_token).await.unwrap(),
        Some(user.id)
    );

    let rotated = service.issue_refresh_token(user.id).await.unwrap();
    assert_eq!(service.consume_refresh_token(&rotated).await.unwrap(), Some(user.id));
    assert_eq!(service.consume_refresh_token(&rotated).await.unwrap(), None);

    service.revoke_refresh_token(&pair.refresh_token).await.unwrap();
    assert_eq!(service.resolve_refresh_token(&pair.refresh_token).await.unwrap(), None);

    service.blacklist_access_token("tok123").await.unwrap();
    assert!(service.is_blacklisted("tok123").await.unwrap());
    assert!(!service.is_blacklisted("tok456").await.unwrap());
    assert_eq!(service.purge_expired().await.unwrap(), 0);
}
