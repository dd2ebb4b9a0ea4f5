//! Configuration management
//!
//! Layered configuration: built-in defaults, an optional TOML file, then
//! `GOLLSYNC_`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, LockConfig, LoggingConfig, StoreConfig, StoreProvider, SyncConfig};
