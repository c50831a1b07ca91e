//! Keystone credential types.
//!
//! Responsibilities:
//! - Define the credential set required for a Keystone V3 password grant.
//! - Handle serialization of the secret password value.
//!
//! Does NOT handle:
//! - The token exchange itself (see client crate).
//! - Loading values from the environment (see `loader` module).
//!
//! Invariants:
//! - The password uses `secrecy::SecretString` so it never appears in Debug
//!   or log output.
//! - Serialization includes the password for config persistence; secrecy is
//!   for runtime safety.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Everything needed to request a project-scoped token from Keystone V3.
///
/// All fields are required: the identity endpoint URL, the user identity,
/// the tenant (project) the token is scoped to, and the region whose
/// object-store endpoints should be resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// Full URL of the Keystone token endpoint, e.g.
    /// `https://keystone.example.com:5000/v3/auth/tokens`.
    pub auth_url: String,
    /// User identifier sent as `user.id` in the token request.
    pub username: String,
    #[serde(with = "secret_string")]
    pub password: SecretString,
    /// Tenant (project) identifier the token is scoped to.
    pub tenant_name: String,
    /// Region whose object-store endpoints are resolved from the catalog.
    pub preferred_region: String,
}

impl Credentials {
    pub fn new(
        auth_url: impl Into<String>,
        username: impl Into<String>,
        password: SecretString,
        tenant_name: impl Into<String>,
        preferred_region: impl Into<String>,
    ) -> Self {
        Self {
            auth_url: auth_url.into(),
            username: username.into(),
            password,
            tenant_name: tenant_name.into(),
            preferred_region: preferred_region.into(),
        }
    }
}
