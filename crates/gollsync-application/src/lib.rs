//! Application Layer - gollsync
//!
//! Implements the synchronization adapter on top of the domain ports.
//!
//! ## Architecture
//!
//! - `domain_services::lock_resolver`: tenant key → distributed mutex handle
//! - `use_cases::sync_adapter_service`: Lock / Unlock / Fetch / Write
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `gollsync-domain`: for ports, value objects and errors
//! - Pure Rust libraries for async and concurrency

pub mod domain_services;
pub mod use_cases;

pub use domain_services::*;
pub use use_cases::*;
