//! # gollsync - Provider Implementations
//!
//! Implementations of the infrastructure ports defined in `gollsync-domain`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Store | `StorePool` | Redis, InMemory |
//! | Lock | `MutexFactory` | LeaseMutexFactory (any `StorePool`) |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! gollsync-providers = { version = "0.1", default-features = false }
//! ```
//!
//! Disabling `store-redis` leaves only the in-memory store.

// Re-export gollsync-domain types commonly used with providers
pub use gollsync_domain::error::{Error, Result};
pub use gollsync_domain::ports::{DistributedMutex, MutexFactory, StoreConnection, StorePool};

/// Provider-specific constants
pub mod constants;

/// Distributed lock primitive implementations
///
/// Implements `MutexFactory` on top of any `StorePool`.
pub mod lock;

/// Key-value store implementations
///
/// Implements `StorePool` for store backends.
pub mod store;

pub use lock::{LeaseMutex, LeaseMutexFactory};
#[cfg(feature = "store-redis")]
pub use store::RedisStorePool;
pub use store::InMemoryStorePool;
