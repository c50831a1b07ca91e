//! Configuration for the Keystone/Swift access adapter.
//!
//! This crate provides the credential and connection types consumed by the
//! client crate, plus a loader that assembles them from environment
//! variables and `.env` files.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader};
pub use types::{Config, ConnectionConfig, Credentials};
