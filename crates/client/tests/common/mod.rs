//! Common test utilities for integration tests.
//!
//! Shared helpers and re-exports for testing the Keystone client against a
//! mocked identity service.

// Re-export test utilities from keystone-client
#[allow(unused_imports)]
pub use keystone_client::testing::load_fixture;

// Re-export commonly used types for test convenience
// These are used via `use common::*;` in test files
#[allow(unused_imports)]
pub use keystone_client::{ClientError, KeystoneClient};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use keystone_config::Credentials;
use secrecy::SecretString;

/// Path the mocked Keystone serves tokens on.
pub const TOKENS_PATH: &str = "/v3/auth/tokens";

/// Credentials pointing at the mock server's token endpoint.
pub fn test_credentials(mock_server: &MockServer, preferred_region: &str) -> Credentials {
    Credentials::new(
        format!("{}{}", mock_server.uri(), TOKENS_PATH),
        "swift-user",
        SecretString::new("swift-password".to_string().into()),
        "swift-tenant",
        preferred_region,
    )
}

/// Client wired to the mock server for `RegionOne`.
pub fn test_client(mock_server: &MockServer) -> KeystoneClient {
    test_client_for_region(mock_server, "RegionOne")
}

/// Client wired to the mock server for an arbitrary region.
pub fn test_client_for_region(mock_server: &MockServer, preferred_region: &str) -> KeystoneClient {
    KeystoneClient::builder()
        .credentials(test_credentials(mock_server, preferred_region))
        .build()
        .expect("test client should build")
}
