//! Store backend configuration

use crate::constants::DEFAULT_REDIS_URL;
use serde::{Deserialize, Serialize};

/// Store backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreProvider {
    /// Shared Redis server
    #[default]
    Redis,
    /// Process-local map; locks only coordinate within this process
    Memory,
}

/// Store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Backend to connect to
    pub provider: StoreProvider,
    /// Connection URL used by the Redis backend
    pub redis_url: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            provider: StoreProvider::default(),
            redis_url: DEFAULT_REDIS_URL.to_string(),
        }
    }
}
