//! Configuration types

pub mod app;
pub mod logging;
pub mod store;
pub mod sync;

pub use app::AppConfig;
pub use logging::LoggingConfig;
pub use store::{StoreConfig, StoreProvider};
pub use sync::{LockConfig, SyncConfig};
