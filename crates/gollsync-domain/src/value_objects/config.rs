//! Adapter construction input

use crate::constants::{BLANK_NAMESPACE_MESSAGE, MISSING_POOL_MESSAGE};
use crate::error::{Error, Result};
use crate::ports::StorePool;
use crate::value_objects::LockRetryPolicy;
use std::fmt;
use std::sync::Arc;

/// Configuration for one synchronization adapter instance
#[derive(Clone, Default)]
pub struct SyncAdapterConfig {
    /// Prefix isolating this adapter's keys in the shared store
    pub namespace: String,
    /// Store the status slot and the locks live in
    pub pool: Option<Arc<dyn StorePool>>,
    /// Retry policy for tenant lock acquisition
    pub lock_retry: LockRetryPolicy,
}

impl SyncAdapterConfig {
    /// Create a config for `namespace` backed by `pool`
    pub fn new<S: Into<String>>(namespace: S, pool: Arc<dyn StorePool>) -> Self {
        Self {
            namespace: namespace.into(),
            pool: Some(pool),
            lock_retry: LockRetryPolicy::default(),
        }
    }

    /// Override the lock retry policy
    pub fn with_lock_retry(mut self, lock_retry: LockRetryPolicy) -> Self {
        self.lock_retry = lock_retry;
        self
    }

    /// Check the config and return the pool it carries
    ///
    /// The namespace is checked before the pool.
    pub fn validate(&self) -> Result<Arc<dyn StorePool>> {
        if self.namespace.trim().is_empty() {
            return Err(Error::config(BLANK_NAMESPACE_MESSAGE));
        }
        self.pool
            .clone()
            .ok_or_else(|| Error::config(MISSING_POOL_MESSAGE))
    }
}

impl fmt::Debug for SyncAdapterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncAdapterConfig")
            .field("namespace", &self.namespace)
            .field("pool", &self.pool.as_ref().map(|pool| pool.provider_name()))
            .field("lock_retry", &self.lock_retry)
            .finish()
    }
}
