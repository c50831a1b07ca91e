//! Keystone V3 client and the authenticate operation.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//!
//! # What this module does NOT handle:
//! - HTTP request implementation (delegated to [`crate::endpoints`])
//! - Catalog scanning (delegated to [`crate::catalog`])
//! - Token renewal or caching: every call is a fresh exchange
//!
//! # Invariants
//! - `authenticate` takes `&self` and keeps no state between calls, so one
//!   client can serve concurrent callers without locking.
//! - Every failure surfaces as a [`ClientError`](crate::ClientError); the
//!   call never panics on wire input.

pub mod builder;

use keystone_config::Credentials;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::access::{Access, AccessProvider};
use crate::catalog;
use crate::endpoints;
use crate::error::Result;
use crate::models::AuthRequest;

/// Client for a Keystone V3 identity endpoint.
///
/// Performs the password-method credential exchange and resolves the Swift
/// object-store endpoints for the configured region.
///
/// # Creating a Client
///
/// Use [`KeystoneClient::builder()`]:
///
/// ```rust,ignore
/// use keystone_client::KeystoneClient;
/// use keystone_config::Credentials;
/// use secrecy::SecretString;
///
/// let client = KeystoneClient::builder()
///     .credentials(Credentials::new(
///         "https://keystone.example.com:5000/v3/auth/tokens",
///         "swift-user",
///         SecretString::new("password".to_string().into()),
///         "swift-tenant",
///         "RegionOne",
///     ))
///     .build()?;
/// let access = client.authenticate().await?;
/// ```
#[derive(Debug)]
pub struct KeystoneClient {
    pub(crate) http: reqwest::Client,
    pub(crate) credentials: Credentials,
}

impl KeystoneClient {
    /// Create a new client builder.
    pub fn builder() -> builder::KeystoneClientBuilder {
        builder::KeystoneClientBuilder::new()
    }

    /// The configured token-issuance URL.
    pub fn auth_url(&self) -> &str {
        &self.credentials.auth_url
    }

    /// Exchange the configured credentials for a bearer token and the
    /// object-store endpoints of the preferred region.
    ///
    /// A catalog without a matching endpoint is not an error: the returned
    /// [`Access`] then carries `None` for that interface and the caller
    /// decides whether that is acceptable.
    ///
    /// Dropping the returned future cancels the in-flight request.
    pub async fn authenticate(&self) -> Result<Access> {
        let request = AuthRequest::password_scoped(
            &self.credentials.username,
            self.credentials.password.expose_secret(),
            &self.credentials.tenant_name,
        );

        let issued =
            endpoints::issue_token(&self.http, &self.credentials.auth_url, &request).await?;

        let resolved = catalog::resolve_object_store(
            &issued.response.token.catalog,
            &self.credentials.preferred_region,
        );
        debug!(
            region = %self.credentials.preferred_region,
            public = resolved.public_url.is_some(),
            internal = resolved.internal_url.is_some(),
            "resolved object-store endpoints"
        );

        Ok(Access::new(
            resolved.internal_url,
            self.credentials.preferred_region.clone(),
            resolved.public_url,
            SecretString::new(issued.subject_token.into()),
        ))
    }
}

impl AccessProvider for KeystoneClient {
    async fn authenticate(&self) -> Result<Access> {
        KeystoneClient::authenticate(self).await
    }
}
