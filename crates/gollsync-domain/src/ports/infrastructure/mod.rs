//! Infrastructure Ports
//!
//! Contracts implemented by `gollsync-providers`.

/// Distributed lock primitive port
pub mod lock;
/// Key-value store port
pub mod store;

pub use lock::{DistributedMutex, MutexFactory};
pub use store::{StoreConnection, StorePool};
