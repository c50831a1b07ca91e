//! Authentication integration tests.
//!
//! These tests run the full authenticate flow against a mocked Keystone V3
//! service, covering:
//! - Successful token issuance with endpoint resolution
//! - Status, header, and body failure modes
//! - Catalog edge cases (no object-store entry, duplicate endpoints,
//!   case-sensitive region matching)
//!
//! # Invariants
//! - Only HTTP 201 is treated as success
//! - The bearer token comes from the X-Subject-Token header, never the body
//! - Token extraction succeeds even when the catalog resolves no endpoints

mod common;

use common::*;
use wiremock::matchers::{body_json, header, method, path};

const TEST_TOKEN: &str = "gAAAAABoJ2V0aGlzLWlzLWEtdGVzdC10b2tlbg";

#[tokio::test]
async fn test_authenticate_success() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("tokens/issue_token_success.json");

    Mock::given(method("POST"))
        .and(path(TOKENS_PATH))
        .and(header("Accept", "application/json"))
        .and(header("Content-Type", "application/json"))
        .respond_with(
            ResponseTemplate::new(201)
                .insert_header("X-Subject-Token", TEST_TOKEN)
                .set_body_json(&fixture),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let access = client.authenticate().await.expect("authenticate failed");

    assert_eq!(access.token(), TEST_TOKEN);
    assert_eq!(access.region(), "RegionOne");
    assert_eq!(
        access.public_url(),
        Some("https://swift.example.com:8080/v1/AUTH_swift-tenant")
    );
    assert_eq!(
        access.internal_url(),
        Some("http://swift-internal.example.com:8080/v1/AUTH_swift-tenant")
    );
}

#[tokio::test]
async fn test_authenticate_sends_documented_request_body() {
    let mock_server = MockServer::start().await;

    let expected_body = serde_json::json!({
        "auth": {
            "identity": {
                "methods": ["password"],
                "password": {
                    "user": {
                        "id": "swift-user",
                        "password": "swift-password"
                    }
                }
            },
            "scope": {
                "project": {
                    "id": "swift-tenant"
                }
            }
        }
    });

    // The mock only matches when the serialized request reproduces the
    // documented schema; anything else falls through to wiremock's 404.
    Mock::given(method("POST"))
        .and(path(TOKENS_PATH))
        .and(body_json(&expected_body))
        .respond_with(
            ResponseTemplate::new(201)
                .insert_header("X-Subject-Token", TEST_TOKEN)
                .set_body_json(load_fixture("tokens/issue_token_success.json")),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let result = client.authenticate().await;
    assert!(result.is_ok(), "request body did not match: {:?}", result.err());
}

#[tokio::test]
async fn test_authenticate_unauthorized_is_failure_not_panic() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TOKENS_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": { "code": 401, "message": "The request you have made requires authentication.", "title": "Unauthorized" }
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.authenticate().await.unwrap_err();

    assert!(
        matches!(err, ClientError::UnexpectedStatus { status: 401, .. }),
        "Expected UnexpectedStatus, got {:?}",
        err
    );
    assert!(err.is_rejection());
}

#[tokio::test]
async fn test_authenticate_server_error_is_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TOKENS_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.authenticate().await.unwrap_err();

    assert!(matches!(
        err,
        ClientError::UnexpectedStatus { status: 503, .. }
    ));
    assert!(!err.is_rejection());
}

#[tokio::test]
async fn test_authenticate_200_is_not_success() {
    // Keystone answers 201 Created on token issuance; a 200 means something
    // in between rewrote the exchange, and is rejected.
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TOKENS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Subject-Token", TEST_TOKEN)
                .set_body_json(load_fixture("tokens/issue_token_success.json")),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.authenticate().await.unwrap_err();

    assert!(matches!(
        err,
        ClientError::UnexpectedStatus { status: 200, .. }
    ));
}

#[tokio::test]
async fn test_authenticate_malformed_body_is_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TOKENS_PATH))
        .respond_with(
            ResponseTemplate::new(201)
                .insert_header("X-Subject-Token", TEST_TOKEN)
                .set_body_string("<html>not json</html>"),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.authenticate().await.unwrap_err();

    assert!(matches!(err, ClientError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_authenticate_missing_subject_token_is_failure() {
    // Policy: a 201 without a usable X-Subject-Token never yields an Access
    // with an empty token; it is a failure in its own right.
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TOKENS_PATH))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(load_fixture("tokens/issue_token_success.json")),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.authenticate().await.unwrap_err();

    assert!(matches!(err, ClientError::MissingToken));
}

#[tokio::test]
async fn test_authenticate_empty_subject_token_is_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TOKENS_PATH))
        .respond_with(
            ResponseTemplate::new(201)
                .insert_header("X-Subject-Token", "")
                .set_body_json(load_fixture("tokens/issue_token_success.json")),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.authenticate().await.unwrap_err();

    assert!(matches!(err, ClientError::MissingToken));
}

#[tokio::test]
async fn test_authenticate_no_object_store_entry_still_returns_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TOKENS_PATH))
        .respond_with(
            ResponseTemplate::new(201)
                .insert_header("X-Subject-Token", TEST_TOKEN)
                .set_body_json(load_fixture("tokens/issue_token_no_object_store.json")),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let access = client.authenticate().await.expect("authenticate failed");

    // Token extraction is independent of catalog resolution.
    assert_eq!(access.token(), TEST_TOKEN);
    assert!(access.public_url().is_none());
    assert!(access.internal_url().is_none());
}

#[tokio::test]
async fn test_authenticate_duplicate_public_endpoints_last_wins() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TOKENS_PATH))
        .respond_with(
            ResponseTemplate::new(201)
                .insert_header("X-Subject-Token", TEST_TOKEN)
                .set_body_json(load_fixture("tokens/issue_token_duplicate_public.json")),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let access = client.authenticate().await.expect("authenticate failed");

    assert_eq!(
        access.public_url(),
        Some("https://swift-b.example.com:8080/v1/AUTH_swift-tenant")
    );
}

#[tokio::test]
async fn test_authenticate_region_match_is_case_sensitive() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TOKENS_PATH))
        .respond_with(
            ResponseTemplate::new(201)
                .insert_header("X-Subject-Token", TEST_TOKEN)
                .set_body_json(load_fixture("tokens/issue_token_success.json")),
        )
        .mount(&mock_server)
        .await;

    // The fixture only has RegionOne/RegionTwo endpoints.
    let client = test_client_for_region(&mock_server, "regionone");
    let access = client.authenticate().await.expect("authenticate failed");

    assert!(access.public_url().is_none());
    assert!(access.internal_url().is_none());
    assert_eq!(access.region(), "regionone");
    assert_eq!(access.token(), TEST_TOKEN);
}

#[tokio::test]
async fn test_authenticate_through_access_provider_seam() {
    use keystone_client::{Access, AccessProvider};

    // Connection setup only knows the trait, not the concrete client.
    async fn connect<P: AccessProvider>(provider: &P) -> keystone_client::Result<Access> {
        provider.authenticate().await
    }

    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TOKENS_PATH))
        .respond_with(
            ResponseTemplate::new(201)
                .insert_header("X-Subject-Token", TEST_TOKEN)
                .set_body_json(load_fixture("tokens/issue_token_success.json")),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let access = connect(&client).await.expect("authenticate failed");
    assert_eq!(access.token(), TEST_TOKEN);
}

#[tokio::test]
async fn test_authenticate_connection_failure_is_transport_error() {
    // Point the client at a server that is no longer listening.
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server);
    drop(mock_server);

    let err = client.authenticate().await.unwrap_err();
    assert!(err.is_transport(), "Expected transport error, got {:?}", err);
}
