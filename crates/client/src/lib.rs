//! Keystone V3 authentication client for Swift object storage.
//!
//! This crate performs the credential exchange a Swift storage backend needs
//! before it can talk to object storage: a single POST to a Keystone V3
//! identity endpoint that yields a short-lived bearer token plus the public
//! and internal object-store URLs for a configured region.

mod access;
pub mod catalog;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod testing;

pub use access::{Access, AccessProvider};
pub use client::KeystoneClient;
pub use client::builder::KeystoneClientBuilder;
pub use error::{ClientError, Result};
