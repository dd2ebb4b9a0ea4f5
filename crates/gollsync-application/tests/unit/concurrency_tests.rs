//! Cross-tenant serialization within one adapter instance

use gollsync_application::SyncAdapterService;
use gollsync_domain::ports::{StorePool, SyncAdapter};
use gollsync_domain::value_objects::{LockRetryPolicy, SyncAdapterConfig, SyncContext};
use gollsync_providers::{InMemoryStorePool, LeaseMutexFactory};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

fn shared_adapter() -> Arc<SyncAdapterService> {
    let pool: Arc<dyn StorePool> = Arc::new(InMemoryStorePool::new());
    let config = SyncAdapterConfig::new("serial", Arc::clone(&pool))
        .with_lock_retry(LockRetryPolicy::new(3, 1, 5));
    Arc::new(SyncAdapterService::new(config, Arc::new(LeaseMutexFactory::new(pool))).unwrap())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_different_tenants_do_not_overlap() {
    let adapter = shared_adapter();
    let events = Arc::new(Mutex::new(Vec::<&'static str>::new()));
    let ctx = SyncContext::background();

    adapter.lock(&ctx, "tenant-a").await.unwrap();
    events.lock().await.push("a locked");

    let second = {
        let adapter = Arc::clone(&adapter);
        let events = Arc::clone(&events);
        tokio::spawn(async move {
            let ctx = SyncContext::background();
            adapter.lock(&ctx, "tenant-b").await.unwrap();
            events.lock().await.push("b locked");
            adapter.unlock(&ctx, "tenant-b").await.unwrap();
        })
    };

    // Give the second task ample time to (wrongly) get through
    tokio::time::sleep(Duration::from_millis(100)).await;
    events.lock().await.push("a unlocking");
    adapter.unlock(&ctx, "tenant-a").await.unwrap();
    events.lock().await.push("a unlocked");

    second.await.unwrap();

    let events = events.lock().await;
    let position = |name: &str| events.iter().position(|e| *e == name).unwrap();
    assert!(position("a locked") < position("a unlocking"));
    assert!(position("a unlocking") < position("b locked"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_critical_sections_never_run_concurrently() {
    let adapter = shared_adapter();
    let inside = Arc::new(std::sync::atomic::AtomicUsize::new(0));
    let max_inside = Arc::new(std::sync::atomic::AtomicUsize::new(0));

    let tasks: Vec<_> = (0..8)
        .map(|i| {
            let adapter = Arc::clone(&adapter);
            let inside = Arc::clone(&inside);
            let max_inside = Arc::clone(&max_inside);
            tokio::spawn(async move {
                use std::sync::atomic::Ordering;
                let ctx = SyncContext::background();
                let tenant = format!("tenant-{i}");

                adapter.lock(&ctx, &tenant).await.unwrap();
                let now = inside.fetch_add(1, Ordering::SeqCst) + 1;
                max_inside.fetch_max(now, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(5)).await;
                adapter
                    .write(&ctx, &tenant, &format!("done by {tenant}"))
                    .await
                    .unwrap();
                inside.fetch_sub(1, Ordering::SeqCst);
                adapter.unlock(&ctx, &tenant).await.unwrap();
            })
        })
        .collect();

    for task in tasks {
        task.await.unwrap();
    }

    assert_eq!(max_inside.load(std::sync::atomic::Ordering::SeqCst), 1);
    let last = adapter
        .fetch(&SyncContext::background(), "any")
        .await
        .unwrap();
    assert!(last.starts_with("done by tenant-"));
}
