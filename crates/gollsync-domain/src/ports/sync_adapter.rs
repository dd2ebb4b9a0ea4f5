//! Synchronization Adapter Port
//!
//! The contract the orchestration layer drives: lock a tenant, exchange the
//! status string, unlock.

use crate::error::Result;
use crate::value_objects::SyncContext;
use async_trait::async_trait;

/// Cross-process synchronization for tenant-scoped work
///
/// # Example
///
/// ```ignore
/// adapter.lock(&ctx, "tenant-a").await?;
/// let status = adapter.fetch(&ctx, "tenant-a").await?;
/// adapter.write(&ctx, "tenant-a", &next(status)).await?;
/// adapter.unlock(&ctx, "tenant-a").await?;
/// ```
#[async_trait]
pub trait SyncAdapter: Send + Sync {
    /// Acquire exclusive access for `tenant_key`
    async fn lock(&self, ctx: &SyncContext, tenant_key: &str) -> Result<()>;

    /// Release access acquired by [`lock`](Self::lock)
    ///
    /// The release runs to completion even when `ctx` is already cancelled
    /// or past its deadline.
    async fn unlock(&self, ctx: &SyncContext, tenant_key: &str) -> Result<()>;

    /// Read the shared status string (empty when unset)
    async fn fetch(&self, ctx: &SyncContext, tenant_key: &str) -> Result<String>;

    /// Overwrite the shared status string
    async fn write(&self, ctx: &SyncContext, tenant_key: &str, status: &str) -> Result<()>;
}
