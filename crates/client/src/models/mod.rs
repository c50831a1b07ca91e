//! Wire models for the Keystone V3 token API.

pub mod tokens;

pub use tokens::{
    AuthRequest, AuthResponse, CatalogEntry, Endpoint, PASSWORD_METHOD, TokenInfo,
};
