//! Use cases

/// Synchronization adapter
pub mod sync_adapter_service;

pub use sync_adapter_service::SyncAdapterService;
