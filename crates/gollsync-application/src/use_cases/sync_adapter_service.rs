//! Synchronization Adapter Use Case
//!
//! Composes a process-local guard with per-tenant distributed mutexes and
//! keeps a namespace-wide status string in the shared store.
//!
//! ## Locking model
//!
//! One guard per adapter instance serializes Lock→Unlock spans of *every*
//! tenant in this process, before the distributed lock is even attempted.
//! The guard is taken by [`lock`](SyncAdapter::lock) and handed back by the
//! matching [`unlock`](SyncAdapter::unlock), so two tenants can never be
//! inside a critical section of the same instance at once.
//!
//! ## Caller context
//!
//! Lock, Fetch and Write give up when the caller's [`SyncContext`] is
//! cancelled or its deadline passes. Unlock does not: the distributed
//! release always runs, so a lease is never left behind because the
//! caller stopped waiting.
//!
//! ## Status slot
//!
//! Fetch and Write ignore the tenant key and always address
//! `{namespace}.data`.

use crate::domain_services::LockIdentityResolver;
use async_trait::async_trait;
use gollsync_domain::error::{Error, Result};
use gollsync_domain::ports::{MutexFactory, StorePool, SyncAdapter};
use gollsync_domain::value_objects::{NamespaceKeys, SyncAdapterConfig, SyncContext};
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedSemaphorePermit, Semaphore};
use tracing::{debug, warn};

/// Store-backed synchronization adapter
pub struct SyncAdapterService {
    keys: NamespaceKeys,
    pool: Arc<dyn StorePool>,
    resolver: LockIdentityResolver,
    /// Single-permit semaphore acting as the process-local guard
    local_guard: Arc<Semaphore>,
    /// Permit taken by the last successful lock, returned by unlock
    held_guard: Mutex<Option<OwnedSemaphorePermit>>,
}

impl SyncAdapterService {
    /// Create the adapter, validating `config`
    pub fn new(config: SyncAdapterConfig, mutex_factory: Arc<dyn MutexFactory>) -> Result<Self> {
        let pool = config.validate()?;
        let keys = NamespaceKeys::new(config.namespace);

        Ok(Self {
            resolver: LockIdentityResolver::new(keys.clone(), mutex_factory, config.lock_retry),
            keys,
            pool,
            local_guard: Arc::new(Semaphore::new(1)),
            held_guard: Mutex::new(None),
        })
    }

    /// The namespace prefix
    pub fn namespace(&self) -> &str {
        self.keys.namespace()
    }

    /// Key of the shared status slot
    pub fn status_key(&self) -> &str {
        self.keys.status_key()
    }

    /// The tenant lock identity resolver
    pub fn resolver(&self) -> &LockIdentityResolver {
        &self.resolver
    }

    /// Whether a Lock→Unlock span is currently open on this instance
    pub fn is_guard_held(&self) -> bool {
        self.local_guard.available_permits() == 0
    }

    async fn acquire_local_guard(&self, ctx: &SyncContext) -> Result<OwnedSemaphorePermit> {
        ctx.run(async {
            Arc::clone(&self.local_guard)
                .acquire_owned()
                .await
                .map_err(|_| Error::internal("process-local guard closed"))
        })
        .await
    }
}

#[async_trait]
impl SyncAdapter for SyncAdapterService {
    async fn lock(&self, ctx: &SyncContext, tenant_key: &str) -> Result<()> {
        let permit = self.acquire_local_guard(ctx).await?;
        let mutex = self.resolver.resolve(tenant_key);

        // Dropping `permit` on the error path releases the guard
        mutex.lock(ctx).await?;

        *self.held_guard.lock().await = Some(permit);
        debug!(tenant_key, key = mutex.name(), "Tenant locked");
        Ok(())
    }

    async fn unlock(&self, _ctx: &SyncContext, tenant_key: &str) -> Result<()> {
        // Released when this call returns, whatever the outcome
        let _guard = match self.held_guard.lock().await.take() {
            Some(permit) => Some(permit),
            None => {
                warn!(tenant_key, "Unlock called without a held process-local guard");
                None
            }
        };

        // The release is never cut short by the caller's context
        let mutex = self.resolver.resolve(tenant_key);
        mutex.unlock().await?;

        debug!(tenant_key, key = mutex.name(), "Tenant unlocked");
        Ok(())
    }

    async fn fetch(&self, ctx: &SyncContext, _tenant_key: &str) -> Result<String> {
        ctx.run(async {
            let mut conn = self.pool.get().await?;
            conn.get(self.keys.status_key()).await
        })
        .await
    }

    async fn write(&self, ctx: &SyncContext, _tenant_key: &str, status: &str) -> Result<()> {
        let stored = ctx
            .run(async {
                let mut conn = self.pool.get().await?;
                conn.set(self.keys.status_key(), status).await
            })
            .await?;

        if stored { Ok(()) } else { Err(Error::WriteFailed) }
    }
}

impl std::fmt::Debug for SyncAdapterService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncAdapterService")
            .field("namespace", &self.keys.namespace())
            .field("pool", &self.pool.provider_name())
            .field("resolver", &self.resolver)
            .field("guard_held", &self.is_guard_held())
            .finish()
    }
}
