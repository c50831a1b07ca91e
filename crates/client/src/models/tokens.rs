//! Request and response schemas for `POST /v3/auth/tokens`.
//!
//! The request nesting (`auth.identity.password.user` plus
//! `auth.scope.project`) is part of the Keystone V3 contract and some
//! deployments are sensitive to it, so the structs mirror it exactly.
//! Response types ignore unknown fields and default missing ones, so a
//! catalog-less token still deserializes.

use serde::{Deserialize, Serialize};

/// The only authentication method this client speaks.
pub const PASSWORD_METHOD: &str = "password";

/// Token issuance request body.
///
/// No Debug impls on the request types: `User` carries the password in the
/// clear, as the wire format requires.
#[derive(Clone, Serialize)]
pub struct AuthRequest {
    pub auth: Auth,
}

#[derive(Clone, Serialize)]
pub struct Auth {
    pub identity: Identity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<Scope>,
}

#[derive(Clone, Serialize)]
pub struct Identity {
    pub methods: Vec<String>,
    pub password: PasswordMethod,
}

#[derive(Clone, Serialize)]
pub struct PasswordMethod {
    pub user: User,
}

/// User identity. `id` carries the configured username.
#[derive(Clone, Serialize)]
pub struct User {
    pub id: String,
    pub password: String,
}

#[derive(Clone, Serialize)]
pub struct Scope {
    pub project: Project,
}

/// Project scope. `id` carries the configured tenant name.
#[derive(Clone, Serialize)]
pub struct Project {
    pub id: String,
}

impl AuthRequest {
    /// Password-method request scoped to a project.
    pub fn password_scoped(username: &str, password: &str, tenant_name: &str) -> Self {
        Self {
            auth: Auth {
                identity: Identity {
                    methods: vec![PASSWORD_METHOD.to_string()],
                    password: PasswordMethod {
                        user: User {
                            id: username.to_string(),
                            password: password.to_string(),
                        },
                    },
                },
                scope: Some(Scope {
                    project: Project {
                        id: tenant_name.to_string(),
                    },
                }),
            },
        }
    }
}

/// Token issuance response body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: TokenInfo,
}

/// The `token` object. Expiry strings are passed through opaquely.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenInfo {
    #[serde(default)]
    pub methods: Vec<String>,
    #[serde(default)]
    pub expires_at: Option<String>,
    #[serde(default)]
    pub catalog: Vec<CatalogEntry>,
    #[serde(default)]
    pub issued_at: Option<String>,
}

/// One service in the catalog.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogEntry {
    #[serde(default)]
    pub endpoints: Vec<Endpoint>,
    #[serde(rename = "type", default)]
    pub service_type: String,
    #[serde(default)]
    pub name: String,
}

/// One regional endpoint of a catalog service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Endpoint {
    #[serde(default)]
    pub region_id: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub interface: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}
