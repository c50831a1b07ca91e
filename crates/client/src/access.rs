//! Access result and the provider seam consumed by storage-connection setup.

use secrecy::{ExposeSecret, SecretString};

use crate::error::Result;

/// Outcome of a successful token exchange.
///
/// Always carries a non-empty bearer token; either endpoint URL may be
/// absent when the catalog had nothing for that interface in the requested
/// region. Callers decide whether a missing endpoint is acceptable.
#[derive(Debug, Clone)]
pub struct Access {
    internal_url: Option<String>,
    region: String,
    public_url: Option<String>,
    token: SecretString,
}

impl Access {
    pub(crate) fn new(
        internal_url: Option<String>,
        region: String,
        public_url: Option<String>,
        token: SecretString,
    ) -> Self {
        Self {
            internal_url,
            region,
            public_url,
            token,
        }
    }

    /// Bearer token for `X-Auth-Token` headers on storage requests.
    pub fn token(&self) -> &str {
        self.token.expose_secret()
    }

    /// Region the endpoints were resolved for.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Object-store URL reachable from outside the deployment, if any.
    pub fn public_url(&self) -> Option<&str> {
        self.public_url.as_deref()
    }

    /// Object-store URL on the deployment-internal network, if any.
    pub fn internal_url(&self) -> Option<&str> {
        self.internal_url.as_deref()
    }
}

/// Credential exchange invoked by the storage client's connection setup.
///
/// Implemented by [`KeystoneClient`](crate::KeystoneClient); a strategy
/// object stands in for it in tests of the (out-of-scope) storage client.
pub trait AccessProvider {
    /// Exchange the configured credentials for an [`Access`].
    fn authenticate(&self) -> impl Future<Output = Result<Access>> + Send;
}
