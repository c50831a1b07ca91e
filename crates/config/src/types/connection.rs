//! Connection configuration types.
//!
//! Responsibilities:
//! - Define transport settings (TLS verification, timeout).
//! - Define the main `Config` structure combining connection and credentials.
//! - Provide serialization helpers for `Duration`.
//!
//! Does NOT handle:
//! - Configuration loading from env/files (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - Duration fields are serialized as seconds (integers).
//! - Defaults come from `constants`, not inline magic numbers.

use crate::constants::DEFAULT_TIMEOUT_SECS;
use crate::types::credentials::Credentials;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Transport settings for the token exchange.
///
/// Timeout policy lives here rather than in the authenticate call itself;
/// the client applies it when the HTTP client is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Whether to skip TLS verification (for self-signed certificates).
    pub skip_verify: bool,
    /// Request timeout (serialized as seconds).
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Transport settings.
    #[serde(default)]
    pub connection: ConnectionConfig,
    /// Keystone credentials.
    pub credentials: Credentials,
}

impl Config {
    /// Config with default transport settings.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            connection: ConnectionConfig::default(),
            credentials,
        }
    }
}
