//! Tests for the lease mutex provider

use async_trait::async_trait;
use gollsync_domain::value_objects::{LockRetryPolicy, MutexOptions, SyncContext};
use gollsync_providers::{
    DistributedMutex, Error, InMemoryStorePool, LeaseMutexFactory, MutexFactory, Result,
    StoreConnection, StorePool,
};
use std::sync::Arc;
use std::time::Duration;

fn fast_options(tries: u32) -> MutexOptions {
    MutexOptions::default()
        .with_expiry(Duration::from_secs(5))
        .with_retry(LockRetryPolicy::new(tries, 1, 5))
}

fn factory(pool: &InMemoryStorePool) -> LeaseMutexFactory {
    LeaseMutexFactory::new(Arc::new(pool.clone()))
}

#[tokio::test]
async fn test_lock_writes_token_and_unlock_removes_it() {
    let pool = InMemoryStorePool::new();
    let mutex = factory(&pool).new_mutex("ns.t.lock", fast_options(1));

    mutex.lock(&SyncContext::background()).await.unwrap();
    let token = pool.peek("ns.t.lock").expect("lease should be stored");
    assert!(!token.is_empty());

    assert!(mutex.unlock().await.unwrap());
    assert!(pool.peek("ns.t.lock").is_none());
}

#[tokio::test]
async fn test_handle_reports_name_and_expiry() {
    let pool = InMemoryStorePool::new();
    let mutex = factory(&pool).new_mutex("ns.t.lock", fast_options(1));

    assert_eq!(mutex.name(), "ns.t.lock");
    assert_eq!(mutex.expiry(), Duration::from_secs(5));
    assert!(pool.is_empty(), "creating a handle must not touch the store");
}

#[tokio::test]
async fn test_contended_lock_gives_up_after_tries() {
    let pool = InMemoryStorePool::new();
    let factory = factory(&pool);
    let holder = factory.new_mutex("ns.t.lock", fast_options(1));
    let contender = factory.new_mutex("ns.t.lock", fast_options(3));

    holder.lock(&SyncContext::background()).await.unwrap();

    match contender.lock(&SyncContext::background()).await {
        Err(Error::LockNotObtained { key }) => assert_eq!(key, "ns.t.lock"),
        other => panic!("Expected LockNotObtained, got {other:?}"),
    }
}

#[tokio::test]
async fn test_contender_acquires_after_release() {
    let pool = InMemoryStorePool::new();
    let factory = factory(&pool);
    let holder = factory.new_mutex("ns.t.lock", fast_options(1));
    let contender = factory.new_mutex("ns.t.lock", fast_options(200));

    holder.lock(&SyncContext::background()).await.unwrap();

    let waiter = tokio::spawn(async move {
        let ctx = SyncContext::background();
        contender.lock(&ctx).await
    });
    tokio::time::sleep(Duration::from_millis(20)).await;
    holder.unlock().await.unwrap();

    waiter.await.unwrap().unwrap();
}

#[tokio::test]
async fn test_unlock_without_lock_fails() {
    let pool = InMemoryStorePool::new();
    let mutex = factory(&pool).new_mutex("ns.never.lock", fast_options(1));

    match mutex.unlock().await {
        Err(Error::LockAlreadyExpired { key }) => assert_eq!(key, "ns.never.lock"),
        other => panic!("Expected LockAlreadyExpired, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unlock_does_not_release_foreign_lease() {
    let pool = InMemoryStorePool::new();
    let factory = factory(&pool);
    let first = factory.new_mutex("ns.t.lock", fast_options(1));
    let second = factory.new_mutex("ns.t.lock", fast_options(1));

    first.lock(&SyncContext::background()).await.unwrap();
    let lease = pool.peek("ns.t.lock");

    assert!(matches!(
        second.unlock().await,
        Err(Error::LockAlreadyExpired { .. })
    ));
    assert_eq!(pool.peek("ns.t.lock"), lease);
}

#[tokio::test(start_paused = true)]
async fn test_expired_lease_can_be_taken_over() {
    let pool = InMemoryStorePool::new();
    let factory = factory(&pool);
    let short = MutexOptions::default()
        .with_expiry(Duration::from_millis(100))
        .with_retry(LockRetryPolicy::new(1, 0, 0));
    let first = factory.new_mutex("ns.t.lock", short);
    let second = factory.new_mutex("ns.t.lock", short);

    first.lock(&SyncContext::background()).await.unwrap();
    tokio::time::advance(Duration::from_millis(150)).await;

    second.lock(&SyncContext::background()).await.unwrap();
    assert!(matches!(
        first.unlock().await,
        Err(Error::LockAlreadyExpired { .. })
    ));
    assert!(second.unlock().await.unwrap());
}

/// Applies `set_if_absent` on the wrapped store, then delays the reply
#[derive(Clone)]
struct SlowReplyPool {
    inner: InMemoryStorePool,
    reply_delay: Duration,
}

struct SlowReplyConnection {
    inner: Box<dyn StoreConnection>,
    reply_delay: Duration,
}

#[async_trait]
impl StorePool for SlowReplyPool {
    async fn get(&self) -> Result<Box<dyn StoreConnection>> {
        Ok(Box::new(SlowReplyConnection {
            inner: self.inner.get().await?,
            reply_delay: self.reply_delay,
        }))
    }

    fn provider_name(&self) -> &str {
        "slow-reply"
    }
}

#[async_trait]
impl StoreConnection for SlowReplyConnection {
    async fn get(&mut self, key: &str) -> Result<String> {
        self.inner.get(key).await
    }

    async fn set(&mut self, key: &str, value: &str) -> Result<bool> {
        self.inner.set(key, value).await
    }

    async fn set_if_absent(&mut self, key: &str, value: &str, ttl: Duration) -> Result<bool> {
        let applied = self.inner.set_if_absent(key, value, ttl).await;
        tokio::time::sleep(self.reply_delay).await;
        applied
    }

    async fn delete_if_equals(&mut self, key: &str, value: &str) -> Result<bool> {
        self.inner.delete_if_equals(key, value).await
    }
}

#[tokio::test(start_paused = true)]
async fn test_lease_won_after_deadline_is_given_back() {
    let store = InMemoryStorePool::new();
    let pool = SlowReplyPool {
        inner: store.clone(),
        reply_delay: Duration::from_millis(50),
    };
    let mutex = LeaseMutexFactory::new(Arc::new(pool)).new_mutex("ns.t.lock", fast_options(3));

    let ctx = SyncContext::with_timeout(Duration::from_millis(10));
    let result = mutex.lock(&ctx).await;

    assert!(matches!(result, Err(Error::DeadlineExceeded)));
    assert!(store.peek("ns.t.lock").is_none());

    // The same handle can take the lock again right away
    mutex.lock(&SyncContext::background()).await.unwrap();
    assert!(mutex.unlock().await.unwrap());
}

#[tokio::test]
async fn test_cancelled_context_sends_no_attempt() {
    let pool = InMemoryStorePool::new();
    let mutex = factory(&pool).new_mutex("ns.t.lock", fast_options(3));
    let ctx = SyncContext::background();
    ctx.cancel();

    assert!(matches!(mutex.lock(&ctx).await, Err(Error::Cancelled)));
    assert!(pool.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_deadline_stops_retries_of_contended_lock() {
    let pool = InMemoryStorePool::new();
    let holder = factory(&pool).new_mutex("ns.t.lock", fast_options(1));
    holder.lock(&SyncContext::background()).await.unwrap();

    let options = MutexOptions::default()
        .with_expiry(Duration::from_secs(5))
        .with_retry(LockRetryPolicy::new(1_000, 50, 60));
    let contender = factory(&pool).new_mutex("ns.t.lock", options);
    let ctx = SyncContext::with_timeout(Duration::from_millis(200));

    assert!(matches!(
        contender.lock(&ctx).await,
        Err(Error::DeadlineExceeded)
    ));
    assert!(holder.unlock().await.unwrap());
}
