//! Lock Identity Resolver
//!
//! Maps a tenant key to the distributed mutex guarding it. Handles are
//! created lazily with a fixed 5 second lease and cached for the lifetime of
//! the resolver. The cache is never evicted: a process that sees many
//! distinct tenant keys keeps one handle for each.

use dashmap::DashMap;
use gollsync_domain::constants::TENANT_LOCK_EXPIRY_SECS;
use gollsync_domain::ports::{DistributedMutex, MutexFactory};
use gollsync_domain::value_objects::{LockRetryPolicy, MutexOptions, NamespaceKeys};
use std::sync::Arc;
use std::time::Duration;
use tracing::trace;

/// Tenant key → mutex handle cache
pub struct LockIdentityResolver {
    keys: NamespaceKeys,
    factory: Arc<dyn MutexFactory>,
    options: MutexOptions,
    handles: DashMap<String, Arc<dyn DistributedMutex>>,
}

impl LockIdentityResolver {
    /// Create a resolver for `keys`' namespace
    pub fn new(
        keys: NamespaceKeys,
        factory: Arc<dyn MutexFactory>,
        lock_retry: LockRetryPolicy,
    ) -> Self {
        Self {
            keys,
            factory,
            options: MutexOptions::default()
                .with_expiry(Duration::from_secs(TENANT_LOCK_EXPIRY_SECS))
                .with_retry(lock_retry),
            handles: DashMap::new(),
        }
    }

    /// Handle for `tenant_key`, created on first use
    ///
    /// A cached handle is returned as is; its options are not refreshed.
    pub fn resolve(&self, tenant_key: &str) -> Arc<dyn DistributedMutex> {
        if let Some(existing) = self.handles.get(tenant_key) {
            return Arc::clone(existing.value());
        }

        let handle = self.handles.entry(tenant_key.to_string()).or_insert_with(|| {
            let name = self.keys.lock_key(tenant_key);
            trace!(tenant_key, key = %name, "Creating tenant lock handle");
            self.factory.new_mutex(&name, self.options)
        });
        Arc::clone(handle.value())
    }

    /// Lock key for `tenant_key`, without creating a handle
    pub fn lock_key(&self, tenant_key: &str) -> String {
        self.keys.lock_key(tenant_key)
    }

    /// Options applied to new handles
    pub fn options(&self) -> &MutexOptions {
        &self.options
    }

    /// Number of cached handles
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Whether no handle was created yet
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

impl std::fmt::Debug for LockIdentityResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LockIdentityResolver")
            .field("namespace", &self.keys.namespace())
            .field("options", &self.options)
            .field("handles", &self.handles.len())
            .finish()
    }
}
