//! Distributed mutex configuration

use crate::constants::{
    DEFAULT_LOCK_EXPIRY_SECS, DEFAULT_LOCK_RETRY_DELAY_MAX_MS, DEFAULT_LOCK_RETRY_DELAY_MIN_MS,
    DEFAULT_LOCK_TRIES,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How a mutex retries a contended acquisition
///
/// The delay before each retry is drawn uniformly from
/// `[min_delay, max_delay)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockRetryPolicy {
    /// Total acquisition attempts (at least one is always made)
    pub tries: u32,
    /// Lower bound of the retry delay
    pub min_delay: Duration,
    /// Upper bound of the retry delay
    pub max_delay: Duration,
}

impl LockRetryPolicy {
    /// Build a policy from attempt count and delay bounds in milliseconds
    pub fn new(tries: u32, min_delay_ms: u64, max_delay_ms: u64) -> Self {
        Self {
            tries,
            min_delay: Duration::from_millis(min_delay_ms),
            max_delay: Duration::from_millis(max_delay_ms),
        }
    }

    /// Attempts actually made
    pub fn effective_tries(&self) -> u32 {
        self.tries.max(1)
    }
}

impl Default for LockRetryPolicy {
    fn default() -> Self {
        Self::new(
            DEFAULT_LOCK_TRIES,
            DEFAULT_LOCK_RETRY_DELAY_MIN_MS,
            DEFAULT_LOCK_RETRY_DELAY_MAX_MS,
        )
    }
}

/// Options handed to a [`MutexFactory`](crate::ports::MutexFactory)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutexOptions {
    /// Lease duration after which the store drops the lock
    pub expiry: Duration,
    /// Acquisition retry policy
    pub retry: LockRetryPolicy,
}

impl MutexOptions {
    /// Set the lease expiry
    pub fn with_expiry(mut self, expiry: Duration) -> Self {
        self.expiry = expiry;
        self
    }

    /// Set the retry policy
    pub fn with_retry(mut self, retry: LockRetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}

impl Default for MutexOptions {
    fn default() -> Self {
        Self {
            expiry: Duration::from_secs(DEFAULT_LOCK_EXPIRY_SECS),
            retry: LockRetryPolicy::default(),
        }
    }
}
