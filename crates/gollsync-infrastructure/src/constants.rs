//! Infrastructure layer constants
//!
//! Domain-specific constants are defined in `gollsync_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "gollsync.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "gollsync";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "GOLLSYNC";

/// Separator for nested keys in environment variables (e.g. `GOLLSYNC_SYNC__NAMESPACE`)
pub const CONFIG_ENV_NESTING_SEPARATOR: &str = "__";

// ============================================================================
// SYNC CONSTANTS
// ============================================================================

/// Namespace used when none is configured
pub const DEFAULT_SYNC_NAMESPACE: &str = "goll";

// ============================================================================
// STORE CONSTANTS
// ============================================================================

/// Default Redis URL
pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "GOLLSYNC_LOG";

/// File stem used when the configured log path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "gollsync";
