//! # gollsync Domain Layer
//!
//! Core types for the gollsync synchronization adapter: the error model,
//! key derivation rules, the caller context and the port traits that
//! providers and the application layer meet at.
//!
//! ## Organization
//!
//! - [`error`] - domain error enum and `Result` alias
//! - [`constants`] - key suffixes, lease expiry and lock retry defaults
//! - [`value_objects`] - derived keys, `SyncContext`, mutex options, adapter config
//! - [`ports`] - `SyncAdapter`, `StorePool`, `MutexFactory` and friends

/// Domain constants
pub mod constants;
/// Error handling types
pub mod error;
/// Port interfaces
pub mod ports;
/// Value objects
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{
    DistributedMutex, MutexFactory, StoreConnection, StorePool, SyncAdapter,
};
pub use value_objects::{
    LockRetryPolicy, MutexOptions, NamespaceKeys, SyncAdapterConfig, SyncContext,
};
