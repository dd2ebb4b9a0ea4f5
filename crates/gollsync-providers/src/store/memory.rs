//! In-memory store provider
//!
//! Process-local store with per-key expiry, backed by `DashMap`. Every
//! connection checked out of one pool sees the same data, so several adapter
//! instances sharing a pool behave like separate processes sharing Redis.
//!
//! ## Example
//!
//! ```
//! use gollsync_providers::store::InMemoryStorePool;
//!
//! let pool = InMemoryStorePool::new();
//! assert!(pool.is_empty());
//! ```

use crate::constants::MEMORY_PROVIDER_NAME;
use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use gollsync_domain::error::Result;
use gollsync_domain::ports::{StoreConnection, StorePool};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug, Clone)]
struct StoredValue {
    value: String,
    expires_at: Option<Instant>,
}

impl StoredValue {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.is_none_or(|expires_at| now < expires_at)
    }
}

/// In-memory store pool
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorePool {
    entries: Arc<DashMap<String, StoredValue>>,
}

impl InMemoryStorePool {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live keys
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .iter()
            .filter(|entry| entry.value().is_live(now))
            .count()
    }

    /// Whether the store holds no live keys
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read a live value without checking out a connection
    pub fn peek(&self, key: &str) -> Option<String> {
        let now = Instant::now();
        self.entries
            .get(key)
            .filter(|stored| stored.is_live(now))
            .map(|stored| stored.value.clone())
    }
}

#[async_trait]
impl StorePool for InMemoryStorePool {
    async fn get(&self) -> Result<Box<dyn StoreConnection>> {
        Ok(Box::new(InMemoryStoreConnection {
            entries: Arc::clone(&self.entries),
        }))
    }

    fn provider_name(&self) -> &str {
        MEMORY_PROVIDER_NAME
    }
}

struct InMemoryStoreConnection {
    entries: Arc<DashMap<String, StoredValue>>,
}

#[async_trait]
impl StoreConnection for InMemoryStoreConnection {
    async fn get(&mut self, key: &str) -> Result<String> {
        let now = Instant::now();
        Ok(self
            .entries
            .get(key)
            .filter(|stored| stored.is_live(now))
            .map(|stored| stored.value.clone())
            .unwrap_or_default())
    }

    async fn set(&mut self, key: &str, value: &str) -> Result<bool> {
        self.entries.insert(
            key.to_string(),
            StoredValue {
                value: value.to_string(),
                expires_at: None,
            },
        );
        Ok(true)
    }

    async fn set_if_absent(&mut self, key: &str, value: &str, ttl: Duration) -> Result<bool> {
        let now = Instant::now();
        let stored = StoredValue {
            value: value.to_string(),
            expires_at: Some(now + ttl),
        };

        match self.entries.entry(key.to_string()) {
            Entry::Occupied(mut occupied) => {
                if occupied.get().is_live(now) {
                    return Ok(false);
                }
                occupied.insert(stored);
                Ok(true)
            }
            Entry::Vacant(vacant) => {
                vacant.insert(stored);
                Ok(true)
            }
        }
    }

    async fn delete_if_equals(&mut self, key: &str, value: &str) -> Result<bool> {
        let now = Instant::now();
        Ok(self
            .entries
            .remove_if(key, |_, stored| stored.is_live(now) && stored.value == value)
            .is_some())
    }
}
