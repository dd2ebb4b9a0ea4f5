//! Lease mutex provider
//!
//! A lock is a store key holding a random token with a time to live:
//!
//! - **lock**: `set_if_absent(name, token, expiry)`, retried with a
//!   randomized delay until the retry policy runs out. The caller's context
//!   is checked between attempts, never in the middle of one
//! - **unlock**: `delete_if_equals(name, token)`, so a holder never deletes a
//!   lease that expired and was taken by someone else
//!
//! The lease is not extended. A holder that outlives its expiry loses
//! exclusivity.
//!
//! ## Example
//!
//! ```ignore
//! use gollsync_providers::{InMemoryStorePool, LeaseMutexFactory};
//!
//! let factory = LeaseMutexFactory::new(Arc::new(InMemoryStorePool::new()));
//! let mutex = factory.new_mutex("jobs.nightly.lock", MutexOptions::default());
//! mutex.lock(&SyncContext::background()).await?;
//! mutex.unlock().await?;
//! ```

use async_trait::async_trait;
use gollsync_domain::error::{Error, Result};
use gollsync_domain::ports::{DistributedMutex, MutexFactory, StorePool};
use gollsync_domain::value_objects::{LockRetryPolicy, MutexOptions, SyncContext};
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, trace};
use uuid::Uuid;

/// Creates [`LeaseMutex`] handles backed by one store pool
#[derive(Clone)]
pub struct LeaseMutexFactory {
    pool: Arc<dyn StorePool>,
}

impl LeaseMutexFactory {
    /// Create a factory over `pool`
    pub fn new(pool: Arc<dyn StorePool>) -> Self {
        Self { pool }
    }
}

impl MutexFactory for LeaseMutexFactory {
    fn new_mutex(&self, name: &str, options: MutexOptions) -> Arc<dyn DistributedMutex> {
        Arc::new(LeaseMutex::new(name, options, Arc::clone(&self.pool)))
    }
}

impl std::fmt::Debug for LeaseMutexFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LeaseMutexFactory")
            .field("pool", &self.pool.provider_name())
            .finish()
    }
}

/// A lease lock on one store key
pub struct LeaseMutex {
    name: String,
    options: MutexOptions,
    pool: Arc<dyn StorePool>,
    /// Token of the lease this handle currently holds
    token: Mutex<Option<String>>,
}

impl LeaseMutex {
    /// Create a handle; no I/O is performed
    pub fn new<S: Into<String>>(name: S, options: MutexOptions, pool: Arc<dyn StorePool>) -> Self {
        Self {
            name: name.into(),
            options,
            pool,
            token: Mutex::new(None),
        }
    }

    /// Options the handle was created with
    pub fn options(&self) -> &MutexOptions {
        &self.options
    }

    async fn try_acquire(&self, token: &str) -> Result<bool> {
        let mut conn = self.pool.get().await?;
        conn.set_if_absent(&self.name, token, self.options.expiry)
            .await
    }

    /// Release a lease won after the caller stopped waiting for it
    async fn give_back(&self, token: &str) {
        let released = match self.pool.get().await {
            Ok(mut conn) => conn.delete_if_equals(&self.name, token).await,
            Err(e) => Err(e),
        };
        match released {
            Ok(_) => debug!(key = %self.name, "Late lease given back"),
            Err(e) => debug!(key = %self.name, error = %e, "Late lease left to expire"),
        }
    }
}

fn retry_delay(policy: &LockRetryPolicy) -> Duration {
    if policy.max_delay <= policy.min_delay {
        return policy.min_delay;
    }
    rand::rng().random_range(policy.min_delay..policy.max_delay)
}

#[async_trait]
impl DistributedMutex for LeaseMutex {
    fn name(&self) -> &str {
        &self.name
    }

    fn expiry(&self) -> Duration {
        self.options.expiry
    }

    async fn lock(&self, ctx: &SyncContext) -> Result<()> {
        let tries = self.options.retry.effective_tries();

        for attempt in 0..tries {
            if attempt > 0 {
                let delay = retry_delay(&self.options.retry);
                ctx.run(async {
                    tokio::time::sleep(delay).await;
                    Ok(())
                })
                .await?;
            }
            ctx.check()?;

            // Not raced against `ctx`: an abandoned SET NX could still land
            let token = Uuid::new_v4().to_string();
            match self.try_acquire(&token).await {
                Ok(true) => {
                    if let Err(e) = ctx.check() {
                        self.give_back(&token).await;
                        return Err(e);
                    }
                    debug!(key = %self.name, attempt, "Lease acquired");
                    *self.token.lock().await = Some(token);
                    return Ok(());
                }
                Ok(false) => {
                    trace!(key = %self.name, attempt, "Lease held elsewhere");
                }
                Err(e) if attempt + 1 == tries => return Err(e),
                Err(e) => {
                    trace!(key = %self.name, attempt, error = %e, "Lease attempt failed");
                }
            }
        }

        Err(Error::lock_not_obtained(&self.name))
    }

    async fn unlock(&self) -> Result<bool> {
        let mut held = self.token.lock().await;
        let Some(token) = held.as_deref() else {
            return Err(Error::lock_already_expired(&self.name));
        };

        let mut conn = self.pool.get().await?;
        let released = conn.delete_if_equals(&self.name, token).await?;
        *held = None;

        if released {
            debug!(key = %self.name, "Lease released");
            Ok(true)
        } else {
            Err(Error::lock_already_expired(&self.name))
        }
    }
}

impl std::fmt::Debug for LeaseMutex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LeaseMutex")
            .field("name", &self.name)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
