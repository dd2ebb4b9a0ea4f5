//! # gollsync
//!
//! Per-tenant distributed locks and a namespace-wide status slot, kept in a
//! shared key-value store (Redis in production).
//!
//! ## Example
//!
//! ```ignore
//! use gollsync::{SyncAdapterConfig, SyncContext, new_sync_adapter};
//! use gollsync::providers::RedisStorePool;
//! use std::sync::Arc;
//!
//! let pool = Arc::new(RedisStorePool::new("redis://127.0.0.1:6379")?);
//! let adapter = new_sync_adapter(SyncAdapterConfig::new("billing", pool))?;
//!
//! let ctx = SyncContext::background();
//! adapter.lock(&ctx, "acme").await?;
//! adapter.write(&ctx, "acme", "{\"step\":2}").await?;
//! adapter.unlock(&ctx, "acme").await?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - errors, key derivation, context and port traits
//! - `application` - the lock identity resolver and the adapter service
//! - `providers` - Redis and in-memory stores, the lease mutex
//! - `infrastructure` - configuration, logging and bootstrap
//! - `cli` - the `gollsync` command line

/// Domain layer - core business logic and types
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use gollsync_domain::*;
}

/// Application layer - the synchronization adapter
pub mod application {
    pub use gollsync_application::*;
}

/// Provider implementations
pub mod providers {
    pub use gollsync_providers::*;
}

/// Infrastructure layer - config, logging and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use gollsync_infrastructure::*;
}

pub mod cli;

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export adapter construction at the crate root
pub use infrastructure::{create_sync_adapter, new_sync_adapter};
