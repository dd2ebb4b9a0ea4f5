//! Provider Constants
//!
//! Constants specific to provider implementations. Domain constants live in
//! `gollsync_domain::constants`.

// ============================================================================
// REDIS CONSTANTS
// ============================================================================

/// Reply Redis sends for an acknowledged SET
pub const REDIS_OK_REPLY: &str = "OK";

/// Deletes KEYS[1] only while it still holds ARGV[1]
pub const REDIS_DELETE_IF_EQUALS_SCRIPT: &str = r#"
if redis.call("GET", KEYS[1]) == ARGV[1] then
    return redis.call("DEL", KEYS[1])
else
    return 0
end
"#;

// ============================================================================
// PROVIDER NAMES
// ============================================================================

/// Name reported by the Redis store pool
pub const REDIS_PROVIDER_NAME: &str = "redis";

/// Name reported by the in-memory store pool
pub const MEMORY_PROVIDER_NAME: &str = "memory";
