//! Redis store provider
//!
//! Shared store implementation using Redis as the backend. Suitable for
//! coordinating multiple processes and machines.
//!
//! ## Example
//!
//! ```ignore
//! use gollsync_providers::store::RedisStorePool;
//!
//! let pool = RedisStorePool::new("redis://localhost:6379")?;
//! // Or with host/port
//! let pool = RedisStorePool::with_host_port("localhost", 6379)?;
//! ```

use crate::constants::{REDIS_DELETE_IF_EQUALS_SCRIPT, REDIS_OK_REPLY, REDIS_PROVIDER_NAME};
use async_trait::async_trait;
use gollsync_domain::error::{Error, Result};
use gollsync_domain::ports::{StoreConnection, StorePool};
use redis::{AsyncCommands, Client, Script, aio::MultiplexedConnection};
use std::time::Duration;

/// Redis store pool
///
/// Every checkout opens a multiplexed async connection from the client.
#[derive(Clone)]
pub struct RedisStorePool {
    client: Client,
    delete_script: Script,
}

impl RedisStorePool {
    /// Create a new Redis store pool with connection string
    ///
    /// # Arguments
    ///
    /// * `connection_string` - Redis connection URL (e.g., "redis://localhost:6379")
    pub fn new(connection_string: &str) -> Result<Self> {
        let client = Client::open(connection_string).map_err(|e| Error::Infrastructure {
            message: format!("Failed to create Redis client: {}", e),
            source: Some(Box::new(e)),
        })?;

        Ok(Self {
            client,
            delete_script: Script::new(REDIS_DELETE_IF_EQUALS_SCRIPT),
        })
    }

    /// Create a new Redis store pool with host and port
    pub fn with_host_port(host: &str, port: u16) -> Result<Self> {
        Self::new(&format!("redis://{}:{}", host, port))
    }
}

#[async_trait]
impl StorePool for RedisStorePool {
    async fn get(&self) -> Result<Box<dyn StoreConnection>> {
        let conn = self
            .client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| Error::Infrastructure {
                message: format!("Failed to get Redis connection: {}", e),
                source: Some(Box::new(e)),
            })?;

        Ok(Box::new(RedisStoreConnection {
            conn,
            delete_script: self.delete_script.clone(),
        }))
    }

    fn provider_name(&self) -> &str {
        REDIS_PROVIDER_NAME
    }
}

impl std::fmt::Debug for RedisStorePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisStorePool").finish_non_exhaustive()
    }
}

/// A checked-out Redis connection
struct RedisStoreConnection {
    conn: MultiplexedConnection,
    delete_script: Script,
}

fn command_error(command: &str, e: redis::RedisError) -> Error {
    Error::Infrastructure {
        message: format!("Redis {} failed: {}", command, e),
        source: Some(Box::new(e)),
    }
}

#[async_trait]
impl StoreConnection for RedisStoreConnection {
    async fn get(&mut self, key: &str) -> Result<String> {
        let value = self
            .conn
            .get::<_, Option<String>>(key)
            .await
            .map_err(|e| command_error("GET", e))?;
        Ok(value.unwrap_or_default())
    }

    async fn set(&mut self, key: &str, value: &str) -> Result<bool> {
        let reply: Option<String> = redis::cmd("SET")
            .arg(key)
            .arg(value)
            .query_async(&mut self.conn)
            .await
            .map_err(|e| command_error("SET", e))?;
        Ok(reply.as_deref() == Some(REDIS_OK_REPLY))
    }

    async fn set_if_absent(&mut self, key: &str, value: &str, ttl: Duration) -> Result<bool> {
        // PX 0 is rejected by Redis
        let ttl_ms = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX).max(1);
        let reply: Option<String> = redis::cmd("SET")
            .arg(key)
            .arg(value)
            .arg("NX")
            .arg("PX")
            .arg(ttl_ms)
            .query_async(&mut self.conn)
            .await
            .map_err(|e| command_error("SET NX", e))?;
        Ok(reply.as_deref() == Some(REDIS_OK_REPLY))
    }

    async fn delete_if_equals(&mut self, key: &str, value: &str) -> Result<bool> {
        let deleted: i64 = self
            .delete_script
            .key(key)
            .arg(value)
            .invoke_async(&mut self.conn)
            .await
            .map_err(|e| command_error("EVALSHA", e))?;
        Ok(deleted > 0)
    }
}
