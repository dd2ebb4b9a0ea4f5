//! Store Provider Implementations
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`InMemoryStorePool`] | Local | Process-local map with expiry |
//! | [`RedisStorePool`] | Distributed | Redis-backed for multi-process use |
//!
//! ## Provider Selection Guide
//!
//! - **Development/Testing**: Use `InMemoryStorePool`
//! - **Multi Process**: Use `RedisStorePool`

pub mod memory;
#[cfg(feature = "store-redis")]
pub mod redis;

pub use self::memory::InMemoryStorePool;
#[cfg(feature = "store-redis")]
pub use self::redis::RedisStorePool;
