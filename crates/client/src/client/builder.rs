//! Client builder for constructing [`KeystoneClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (credentials, parseable auth URL)
//! - Configuring the underlying HTTP client (timeout, TLS verification)
//!
//! # What this module does NOT handle:
//! - The token exchange itself (see [`KeystoneClient::authenticate`])
//! - Loading credentials from the environment (see the config crate)
//!
//! # Invariants
//! - `credentials` is required and must be provided before calling `build()`
//! - The auth URL is used exactly as configured; it is validated but never
//!   rewritten (no trailing-slash normalization, no path concatenation)
//! - `skip_verify` only affects HTTPS auth URLs; plain HTTP logs a warning

use std::time::Duration;

use keystone_config::{Config, Credentials, constants::DEFAULT_TIMEOUT_SECS};

use crate::client::KeystoneClient;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`KeystoneClient`].
pub struct KeystoneClientBuilder {
    credentials: Option<Credentials>,
    skip_verify: bool,
    timeout: Duration,
}

impl Default for KeystoneClientBuilder {
    fn default() -> Self {
        Self {
            credentials: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl KeystoneClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Keystone credentials.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this in development or testing environments. Disabling TLS
    /// verification makes the connection vulnerable to man-in-the-middle
    /// attacks.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the request timeout.
    ///
    /// Default is 30 seconds. Applied at the transport layer; the
    /// authenticate call itself configures no timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Populate the builder from loaded configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.credentials = Some(config.credentials.clone());
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self
    }

    /// Build the [`KeystoneClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingCredentials`] if no credentials were
    /// provided, [`ClientError::InvalidUrl`] if the auth URL does not parse,
    /// and [`ClientError::Http`] if the HTTP client fails to build.
    pub fn build(self) -> Result<KeystoneClient> {
        let credentials = self.credentials.ok_or(ClientError::MissingCredentials)?;

        url::Url::parse(&credentials.auth_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", credentials.auth_url, e)))?;

        let mut http_builder = reqwest::Client::builder().timeout(self.timeout);
        if self.skip_verify {
            if credentials.auth_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                // skip_verify only affects TLS certificate verification.
                // It has no effect on HTTP connections since there is no TLS layer.
                tracing::warn!(
                    "skip_verify=true has no effect on plain-HTTP auth URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }
        let http = http_builder.build()?;

        Ok(KeystoneClient { http, credentials })
    }
}
