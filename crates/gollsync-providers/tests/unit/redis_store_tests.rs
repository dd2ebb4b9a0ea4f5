//! Tests for the Redis store provider
//!
//! Construction tests never open a connection. The round-trip tests need a
//! Redis server on `localhost:6379` and are ignored by default.

use gollsync_domain::value_objects::{LockRetryPolicy, MutexOptions, SyncContext};
use gollsync_providers::{
    DistributedMutex, LeaseMutexFactory, MutexFactory, RedisStorePool, StoreConnection, StorePool,
};
use std::sync::Arc;
use std::time::Duration;

#[test]
fn test_valid_url_creates_pool() {
    let pool = RedisStorePool::new("redis://127.0.0.1:6379").unwrap();
    assert_eq!(pool.provider_name(), "redis");
}

#[test]
fn test_host_port_constructor() {
    assert!(RedisStorePool::with_host_port("localhost", 6379).is_ok());
}

#[test]
fn test_invalid_url_is_rejected() {
    let result = RedisStorePool::new("not a redis url");
    match result {
        Err(gollsync_providers::Error::Infrastructure { message, .. }) => {
            assert!(message.contains("Redis client"));
        }
        Err(other) => panic!("Expected Infrastructure error, got {other:?}"),
        Ok(_) => panic!("Expected an error for an invalid URL"),
    }
}

// ============================================================================
// Live server round-trips
//
// Run with: `cargo test -p gollsync-providers --test unit redis_store -- --ignored`
// ============================================================================

/// Key that no other test run shares
fn unique_key(label: &str) -> String {
    format!("gollsync-test.{label}.{}", uuid::Uuid::new_v4())
}

fn local_pool() -> RedisStorePool {
    RedisStorePool::with_host_port("localhost", 6379).unwrap()
}

#[tokio::test]
#[ignore = "requires a Redis server on localhost:6379"]
async fn test_redis_get_missing_key_is_empty() {
    let mut conn = local_pool().get().await.unwrap();
    assert_eq!(conn.get(&unique_key("missing")).await.unwrap(), "");
}

#[tokio::test]
#[ignore = "requires a Redis server on localhost:6379"]
async fn test_redis_set_then_get() {
    let key = unique_key("status");
    let mut conn = local_pool().get().await.unwrap();

    assert!(conn.set(&key, "{\"step\":1}").await.unwrap());
    assert_eq!(conn.get(&key).await.unwrap(), "{\"step\":1}");

    assert!(conn.set(&key, "").await.unwrap());
    assert_eq!(conn.get(&key).await.unwrap(), "");
}

#[tokio::test]
#[ignore = "requires a Redis server on localhost:6379"]
async fn test_redis_set_if_absent_and_compare_delete() {
    let key = unique_key("lease");
    let pool = local_pool();
    let mut conn = pool.get().await.unwrap();
    let ttl = Duration::from_secs(5);

    assert!(conn.set_if_absent(&key, "token-a", ttl).await.unwrap());
    assert!(!conn.set_if_absent(&key, "token-b", ttl).await.unwrap());
    assert_eq!(conn.get(&key).await.unwrap(), "token-a");

    // A foreign token leaves the lease alone
    assert!(!conn.delete_if_equals(&key, "token-b").await.unwrap());
    assert_eq!(conn.get(&key).await.unwrap(), "token-a");

    assert!(conn.delete_if_equals(&key, "token-a").await.unwrap());
    assert_eq!(conn.get(&key).await.unwrap(), "");
    assert!(!conn.delete_if_equals(&key, "token-a").await.unwrap());
}

#[tokio::test]
#[ignore = "requires a Redis server on localhost:6379"]
async fn test_redis_set_if_absent_expires() {
    let key = unique_key("expiring");
    let mut conn = local_pool().get().await.unwrap();

    assert!(
        conn.set_if_absent(&key, "short", Duration::from_millis(50))
            .await
            .unwrap()
    );
    tokio::time::sleep(Duration::from_millis(150)).await;

    assert_eq!(conn.get(&key).await.unwrap(), "");
    assert!(
        conn.set_if_absent(&key, "next", Duration::from_secs(5))
            .await
            .unwrap()
    );
    assert!(conn.delete_if_equals(&key, "next").await.unwrap());
}

#[tokio::test]
#[ignore = "requires a Redis server on localhost:6379"]
async fn test_redis_lease_mutex_contention() {
    let key = unique_key("mutex");
    let factory = LeaseMutexFactory::new(Arc::new(local_pool()));
    let options = MutexOptions::default()
        .with_expiry(Duration::from_secs(5))
        .with_retry(LockRetryPolicy::new(3, 5, 10));
    let holder = factory.new_mutex(&key, options);
    let contender = factory.new_mutex(&key, options);
    let ctx = SyncContext::background();

    holder.lock(&ctx).await.unwrap();
    assert!(matches!(
        contender.lock(&ctx).await,
        Err(gollsync_providers::Error::LockNotObtained { .. })
    ));

    assert!(holder.unlock().await.unwrap());
    contender.lock(&ctx).await.unwrap();
    assert!(contender.unlock().await.unwrap());
}
