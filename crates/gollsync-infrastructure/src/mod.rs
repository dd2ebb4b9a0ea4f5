//! Infrastructure Layer - gollsync
//!
//! Cross-cutting technical concerns: configuration loading, logging setup,
//! error context and the wiring that turns a configuration into a ready
//! [`SyncAdapter`](gollsync_domain::ports::SyncAdapter).
//!
//! ## Modules
//!
//! - [`config`] - figment-based loader and configuration types
//! - [`logging`] - tracing subscriber initialization
//! - [`error_ext`] - context extension for foreign errors
//! - [`bootstrap`] - store pool and adapter construction

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use bootstrap::{create_store_pool, create_sync_adapter, new_sync_adapter};
pub use config::{AppConfig, ConfigLoader};
