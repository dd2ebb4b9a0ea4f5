//! Distributed Lock Primitive Port
//!
//! Lease acquisition, retry and token-checked release are delegated to an
//! implementation of these traits.

use crate::error::Result;
use crate::value_objects::{MutexOptions, SyncContext};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// A named lock shared through the store
///
/// Creating a handle performs no I/O; the store is contacted on
/// [`lock`](Self::lock) and [`unlock`](Self::unlock).
#[async_trait]
pub trait DistributedMutex: Send + Sync {
    /// Store key of this lock
    fn name(&self) -> &str;

    /// Lease duration
    fn expiry(&self) -> Duration;

    /// Acquire the lock, retrying per the handle's policy
    ///
    /// `ctx` is honored between attempts. An attempt already sent to the
    /// store runs to completion, and a lease it wins after the context
    /// ended is given back before the context error is returned.
    async fn lock(&self, ctx: &SyncContext) -> Result<()>;

    /// Release the lock
    ///
    /// Not bounded by any caller context: a release is always attempted.
    async fn unlock(&self) -> Result<bool>;
}

/// Creates distributed mutex handles
pub trait MutexFactory: Send + Sync {
    /// Build a handle for `name`; no I/O is performed
    fn new_mutex(&self, name: &str, options: MutexOptions) -> Arc<dyn DistributedMutex>;
}
