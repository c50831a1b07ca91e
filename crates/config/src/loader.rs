//! Environment-based configuration loading.
//!
//! Responsibilities:
//! - Read `SWIFT_*` environment variables into a [`Config`].
//! - Optionally load a `.env` file first (values already in the environment
//!   take precedence, per dotenvy semantics).
//! - Filter empty/whitespace-only variables and trim values.
//!
//! Does NOT handle:
//! - Building the HTTP client (see client crate).
//! - Persisting configuration back to disk.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Invalid numeric or boolean values return `ConfigError::InvalidValue`.
//! - `SWIFT_AUTH_URL` must parse as a URL.

use secrecy::SecretString;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::constants::MAX_TIMEOUT_SECS;
use crate::types::{Config, ConnectionConfig, Credentials};

/// Errors raised while assembling configuration from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is unset or blank.
    #[error("Missing required environment variable {var}")]
    MissingVar { var: &'static str },

    /// An environment variable is set but unusable.
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: &'static str, message: String },
}

/// Read an environment variable, returning None if unset, empty, or
/// whitespace-only. The returned value is trimmed.
fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn require(var: &'static str) -> Result<String, ConfigError> {
    env_var_or_none(var).ok_or(ConfigError::MissingVar { var })
}

/// Loader for environment-based configuration.
///
/// # Example
///
/// ```rust,ignore
/// use keystone_config::ConfigLoader;
///
/// let config = ConfigLoader::new().with_dotenv(true).load()?;
/// ```
#[derive(Debug, Default)]
pub struct ConfigLoader {
    use_dotenv: bool,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether to load a `.env` file before reading the environment.
    ///
    /// Variables already present in the environment win over `.env` entries.
    pub fn with_dotenv(mut self, enabled: bool) -> Self {
        self.use_dotenv = enabled;
        self
    }

    /// Assemble a [`Config`] from the environment.
    ///
    /// Required variables: `SWIFT_AUTH_URL`, `SWIFT_USER`, `SWIFT_PASSWORD`,
    /// `SWIFT_TENANT`, `SWIFT_REGION`. Optional: `SWIFT_SKIP_VERIFY`,
    /// `SWIFT_TIMEOUT` (seconds, 1..=3600).
    pub fn load(self) -> Result<Config, ConfigError> {
        if self.use_dotenv
            && let Ok(path) = dotenvy::dotenv()
        {
            debug!(path = %path.display(), "loaded .env file");
        }

        let auth_url = require("SWIFT_AUTH_URL")?;
        url::Url::parse(&auth_url).map_err(|e| ConfigError::InvalidValue {
            var: "SWIFT_AUTH_URL",
            message: e.to_string(),
        })?;

        let username = require("SWIFT_USER")?;
        let password = SecretString::new(require("SWIFT_PASSWORD")?.into());
        let tenant_name = require("SWIFT_TENANT")?;
        let preferred_region = require("SWIFT_REGION")?;

        let mut connection = ConnectionConfig::default();
        if let Some(skip) = env_var_or_none("SWIFT_SKIP_VERIFY") {
            connection.skip_verify = skip.parse().map_err(|_| ConfigError::InvalidValue {
                var: "SWIFT_SKIP_VERIFY",
                message: "must be true or false".to_string(),
            })?;
        }
        if let Some(timeout) = env_var_or_none("SWIFT_TIMEOUT") {
            let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
                var: "SWIFT_TIMEOUT",
                message: "must be a number of seconds".to_string(),
            })?;
            if secs == 0 || secs > MAX_TIMEOUT_SECS {
                return Err(ConfigError::InvalidValue {
                    var: "SWIFT_TIMEOUT",
                    message: format!("must be between 1 and {} (got {})", MAX_TIMEOUT_SECS, secs),
                });
            }
            connection.timeout = Duration::from_secs(secs);
        }

        Ok(Config {
            connection,
            credentials: Credentials {
                auth_url,
                username,
                password,
                tenant_name,
                preferred_region,
            },
        })
    }
}
