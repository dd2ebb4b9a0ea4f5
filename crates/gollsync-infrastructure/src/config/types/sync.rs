//! Synchronization adapter configuration

use crate::constants::DEFAULT_SYNC_NAMESPACE;
use gollsync_domain::constants::{
    DEFAULT_LOCK_RETRY_DELAY_MAX_MS, DEFAULT_LOCK_RETRY_DELAY_MIN_MS, DEFAULT_LOCK_TRIES,
};
use gollsync_domain::value_objects::LockRetryPolicy;
use serde::{Deserialize, Serialize};

/// Retry tuning of the tenant locks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LockConfig {
    /// Acquisition attempts before giving up
    pub tries: u32,
    /// Lower bound of the delay between attempts
    pub retry_delay_min_ms: u64,
    /// Upper bound (exclusive) of the delay between attempts
    pub retry_delay_max_ms: u64,
}

impl Default for LockConfig {
    fn default() -> Self {
        Self {
            tries: DEFAULT_LOCK_TRIES,
            retry_delay_min_ms: DEFAULT_LOCK_RETRY_DELAY_MIN_MS,
            retry_delay_max_ms: DEFAULT_LOCK_RETRY_DELAY_MAX_MS,
        }
    }
}

impl LockConfig {
    /// The retry policy handed to the lock primitive
    pub fn retry_policy(&self) -> LockRetryPolicy {
        LockRetryPolicy::new(self.tries, self.retry_delay_min_ms, self.retry_delay_max_ms)
    }
}

/// Adapter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Key prefix isolating this adapter's keys
    pub namespace: String,
    /// Tenant lock tuning
    pub lock: LockConfig,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_SYNC_NAMESPACE.to_string(),
            lock: LockConfig::default(),
        }
    }
}
