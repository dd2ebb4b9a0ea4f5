//! Main application configuration

use super::{LoggingConfig, StoreConfig, SyncConfig};
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Adapter namespace and lock tuning
    #[serde(default)]
    pub sync: SyncConfig,
    /// Shared store backend
    #[serde(default)]
    pub store: StoreConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}
