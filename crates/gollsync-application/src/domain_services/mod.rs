//! Domain services

/// Tenant lock identity resolution
pub mod lock_resolver;

pub use lock_resolver::LockIdentityResolver;
