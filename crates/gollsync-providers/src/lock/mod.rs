//! Distributed Lock Provider Implementations
//!
//! | Provider | Description |
//! |----------|-------------|
//! | [`LeaseMutexFactory`] | Single-store lease lock over any `StorePool` |

pub mod lease;

pub use lease::{LeaseMutex, LeaseMutexFactory};
