//! Value Objects
//!
//! Immutable values passed across the port boundaries.

/// Adapter construction input
pub mod config;
/// Caller context (cancellation and deadline)
pub mod context;
/// Store key derivation
pub mod keys;
/// Distributed mutex configuration
pub mod mutex_options;

pub use config::SyncAdapterConfig;
pub use context::SyncContext;
pub use keys::{NamespaceKeys, escape_tenant_key};
pub use mutex_options::{LockRetryPolicy, MutexOptions};
