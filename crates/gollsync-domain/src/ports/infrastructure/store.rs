//! Key-Value Store Port
//!
//! The shared store holding both the tenant locks and the status slot.
//! Connection pooling, retries and the wire protocol belong to the
//! implementation.

use crate::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// A connection checked out of a [`StorePool`]
#[async_trait]
pub trait StoreConnection: Send {
    /// Read a value; an absent key reads as the empty string
    async fn get(&mut self, key: &str) -> Result<String>;

    /// Store a value, reporting whether the store acknowledged the write
    async fn set(&mut self, key: &str, value: &str) -> Result<bool>;

    /// Store a value with a time to live only if the key does not exist
    ///
    /// Returns `true` when the value was stored.
    async fn set_if_absent(&mut self, key: &str, value: &str, ttl: Duration) -> Result<bool>;

    /// Atomically delete the key if it currently holds `value`
    ///
    /// Returns `true` when the key was deleted.
    async fn delete_if_equals(&mut self, key: &str, value: &str) -> Result<bool>;
}

/// Source of store connections
#[async_trait]
pub trait StorePool: Send + Sync {
    /// Check out a connection
    async fn get(&self) -> Result<Box<dyn StoreConnection>>;

    /// Short provider name used in logs
    fn provider_name(&self) -> &str;
}
