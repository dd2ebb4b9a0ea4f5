//! Adapter bootstrap
//!
//! Builds store pools and ready-to-use adapters from configuration. This is
//! the public constructor surface: callers get an
//! `Arc<dyn SyncAdapter>` without naming the concrete service.

use crate::config::{AppConfig, StoreConfig, StoreProvider};
use gollsync_application::SyncAdapterService;
use gollsync_domain::error::Result;
use gollsync_domain::ports::{StorePool, SyncAdapter};
use gollsync_domain::value_objects::SyncAdapterConfig;
use gollsync_providers::{InMemoryStorePool, LeaseMutexFactory, RedisStorePool};
use std::sync::Arc;
use tracing::debug;

/// Create the store pool selected by `config`
///
/// No connection is opened here; the Redis backend connects on checkout.
pub fn create_store_pool(config: &StoreConfig) -> Result<Arc<dyn StorePool>> {
    let pool: Arc<dyn StorePool> = match config.provider {
        StoreProvider::Redis => Arc::new(RedisStorePool::new(&config.redis_url)?),
        StoreProvider::Memory => Arc::new(InMemoryStorePool::new()),
    };
    debug!(provider = pool.provider_name(), "Store pool created");
    Ok(pool)
}

/// Create an adapter over `config.pool`, locking through lease mutexes on
/// the same pool
///
/// Fails with `Error::Config` on a blank namespace or a missing pool.
pub fn new_sync_adapter(config: SyncAdapterConfig) -> Result<Arc<dyn SyncAdapter>> {
    let pool = config.validate()?;
    let factory = Arc::new(LeaseMutexFactory::new(pool));
    Ok(Arc::new(SyncAdapterService::new(config, factory)?))
}

/// Create an adapter from the application configuration
pub fn create_sync_adapter(config: &AppConfig) -> Result<Arc<dyn SyncAdapter>> {
    let pool = create_store_pool(&config.store)?;
    let adapter_config = SyncAdapterConfig::new(config.sync.namespace.clone(), pool)
        .with_lock_retry(config.sync.lock.retry_policy());
    new_sync_adapter(adapter_config)
}
