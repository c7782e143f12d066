//! Unit tests for the in-memory token store

use std::sync::Arc;
use std::time::Duration;

use crate::repositories::token::{InMemoryTokenStore, TokenStore};

const HOUR: Duration = Duration::from_secs(3600);

#[tokio::test]
async fn test_put_and_get() {
    let store = InMemoryTokenStore::new();

    store.put("refresh:abc", "user-1", HOUR).await.unwrap();

    assert_eq!(store.get("refresh:abc").await.unwrap().as_deref(), Some("user-1"));
    assert!(store.exists("refresh:abc").await.unwrap());
    assert_eq!(store.get("refresh:missing").await.unwrap(), None);
}

#[tokio::test]
async fn test_put_overwrites() {
    let store = InMemoryTokenStore::new();

    store.put("refresh:abc", "user-1", HOUR).await.unwrap();
    store.put("refresh:abc", "user-2", HOUR).await.unwrap();

    assert_eq!(store.get("refresh:abc").await.unwrap().as_deref(), Some("user-2"));
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let store = InMemoryTokenStore::new();
    store.put("blacklist:abc", "1", HOUR).await.unwrap();

    assert!(store.delete("blacklist:abc").await.unwrap());
    assert!(!store.delete("blacklist:abc").await.unwrap());
    assert!(!store.exists("blacklist:abc").await.unwrap());
}

#[tokio::test]
async fn test_expired_entry_reads_as_absent() {
    let store = InMemoryTokenStore::new();
    store.put("refresh:short", "user-1", Duration::from_millis(20)).await.unwrap();

    tokio::time::sleep(Duration::from_millis(40)).await;

    assert_eq!(store.get("refresh:short").await.unwrap(), None);
    // lazily removed on read
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_zero_ttl_never_reads() {
    let store = InMemoryTokenStore::new();
    store.put("blacklist:gone", "1", Duration::ZERO).await.unwrap();

    assert!(!store.exists("blacklist:gone").await.unwrap());
}

#[tokio::test]
async fn test_huge_ttl_does_not_overflow() {
    let store = InMemoryTokenStore::new();
    store.put("refresh:forever", "user-1", Duration::MAX).await.unwrap();

    assert!(store.exists("refresh:forever").await.unwrap());
    assert_eq!(store.purge_expired().await.unwrap(), 0);
}

#[tokio::test]
async fn test_purge_expired_removes_only_expired() {
    let store = InMemoryTokenStore::new();
    store.put("refresh:a", "user-1", Duration::from_millis(10)).await.unwrap();
    store.put("refresh:b", "user-2", Duration::from_millis(10)).await.unwrap();
    store.put("refresh:c", "user-3", HOUR).await.unwrap();

    tokio::time::sleep(Duration::from_millis(30)).await;

    assert_eq!(store.purge_expired().await.unwrap(), 2);
    assert_eq!(store.len(), 1);
    assert!(store.exists("refresh:c").await.unwrap());
}

#[tokio::test]
async fn test_clones_share_state() {
    let store = InMemoryTokenStore::new();
    let other = store.clone();

    store.put("refresh:shared", "user-1", HOUR).await.unwrap();
    assert!(other.exists("refresh:shared").await.unwrap());
}

#[tokio::test]
async fn test_arc_dyn_store_forwards() {
    let store: Arc<dyn TokenStore> = Arc::new(InMemoryTokenStore::new());

    store.put("refresh:dyn", "user-1", HOUR).await.unwrap();
    assert_eq!(store.get("refresh:dyn").await.unwrap().as_deref(), Some("user-1"));
    assert!(store.delete("refresh:dyn").await.unwrap());
    assert_eq!(store.purge_expired().await.unwrap(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_writers() {
    let store = InMemoryTokenStore::new();

    let handles: Vec<_> = (0..32)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .put(&format!("refresh:{}", i), &i.to_string(), HOUR)
                    .await
                    .unwrap();
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(store.len(), 32);
    assert_eq!(store.get("refresh:17").await.unwrap().as_deref(), Some("17"));
}

#[tokio::test]
async fn test_take_returns_value_once() {
    let store = InMemoryTokenStore::new();
    store.put("refresh:abc", "user-1", HOUR).await.unwrap();

    assert_eq!(store.take("refresh:abc").await.unwrap().as_deref(), Some("user-1"));
    assert_eq!(store.take("refresh:abc").await.unwrap(), None);
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_take_ignores_expired_entry() {
    let store = InMemoryTokenStore::new();
    store.put("refresh:old", "user-1", Duration::ZERO).await.unwrap();

    assert_eq!(store.take("refresh:old").await.unwrap(), None);
    assert!(store.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_take_has_single_winner() {
    let store = InMemoryTokenStore::new();
    store.put("refresh:contended", "user-1", HOUR).await.unwrap();

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let store = store.clone();
            tokio::spawn(async move { store.take("refresh:contended").await.unwrap() })
        })
        .collect();

    let mut winners = 0;
    for handle in handles {
        if handle.await.unwrap().is_some() {
            winners += 1;
        }
    }
    assert_eq!(winners, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_expired_read_never_removes_fresh_write() {
    let store = InMemoryTokenStore::new();

    for round in 0..200 {
        store.put("refresh:racy", "old", Duration::ZERO).await.unwrap();

        let reader = {
            let store = store.clone();
            tokio::spawn(async move { store.get("refresh:racy").await.unwrap() })
        };
        let writer = {
            let store = store.clone();
            tokio::spawn(async move { store.put("refresh:racy", "new", HOUR).await.unwrap() })
        };
        reader.await.unwrap();
        writer.await.unwrap();

        assert_eq!(
            store.get("refresh:racy").await.unwrap().as_deref(),
            Some("new"),
            "fresh entry lost in round {}",
            round
        );
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_purge_count_ignores_concurrent_inserts() {
    let store = InMemoryTokenStore::new();
    for i in 0..100 {
        store
            .put(&format!("blacklist:old{}", i), "1", Duration::ZERO)
            .await
            .unwrap();
    }

    let writer = {
        let store = store.clone();
        tokio::spawn(async move {
            for i in 0..100 {
                store
                    .put(&format!("blacklist:new{}", i), "1", HOUR)
                    .await
                    .unwrap();
            }
        })
    };
    let purged = store.purge_expired().await.unwrap();
    writer.await.unwrap();

    assert_eq!(purged, 100);
    assert_eq!(store.len(), 100);
}
