//! Domain Port Interfaces
//!
//! Boundary contracts between the adapter and its collaborators.
//!
//! ## Organization
//!
//! - **infrastructure/** - consumed ports: store pool and distributed mutex
//! - **sync_adapter** - the exposed contract the orchestration layer drives

/// Infrastructure service ports
pub mod infrastructure;
/// Exposed synchronization contract
pub mod sync_adapter;

pub use infrastructure::{DistributedMutex, MutexFactory, StoreConnection, StorePool};
pub use sync_adapter::SyncAdapter;
