//! Domain layer constants
//!
//! Key layout and lock timing shared by the application layer and the
//! providers. Infrastructure-only constants live in
//! `gollsync_infrastructure::constants`.

// ============================================================================
// KEY LAYOUT CONSTANTS
// ============================================================================

/// Separator between key segments
pub const KEY_SEPARATOR: &str = ".";

/// Suffix of per-tenant lock keys
pub const LOCK_KEY_SUFFIX: &str = "lock";

/// Suffix of the namespace-wide status key
pub const STATUS_KEY_SUFFIX: &str = "data";

// ============================================================================
// LOCK TIMING CONSTANTS
// ============================================================================

/// Lease expiry applied to every tenant lock handle (5 seconds)
pub const TENANT_LOCK_EXPIRY_SECS: u64 = 5;

/// Lease expiry used by mutex options when none is given (8 seconds)
pub const DEFAULT_LOCK_EXPIRY_SECS: u64 = 8;

/// Acquisition attempts before giving up
pub const DEFAULT_LOCK_TRIES: u32 = 32;

/// Lower bound of the randomized delay between attempts
pub const DEFAULT_LOCK_RETRY_DELAY_MIN_MS: u64 = 50;

/// Upper bound (exclusive) of the randomized delay between attempts
pub const DEFAULT_LOCK_RETRY_DELAY_MAX_MS: u64 = 250;

// ============================================================================
// ERROR MESSAGES
// ============================================================================

/// Returned when the adapter namespace is blank
pub const BLANK_NAMESPACE_MESSAGE: &str = "invalid mutex name, should be non-blank";

/// Returned when no store pool is configured
pub const MISSING_POOL_MESSAGE: &str = "a store pool is required";
