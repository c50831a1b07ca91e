//! Configuration types.

mod connection;
mod credentials;

pub use connection::{Config, ConnectionConfig};
pub use credentials::Credentials;
