//! Error types for the Keystone client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during the token exchange.
///
/// All variants are terminal: nothing here is retried, and none of them
/// abort the host process. Callers treat any of these as "no access".
#[derive(Error, Debug)]
pub enum ClientError {
    /// The token request could not be encoded as JSON.
    #[error("Failed to encode token request: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Transport failure, including timeouts raised by the HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Keystone answered with a status other than 201 Created.
    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body could not be decoded as a token response.
    #[error("Invalid token response: {0}")]
    InvalidResponse(String),

    /// A 201 response arrived without a usable `X-Subject-Token` header.
    #[error("Response is missing the X-Subject-Token header")]
    MissingToken,

    /// The configured auth URL is not a valid URL.
    #[error("Invalid auth URL: {0}")]
    InvalidUrl(String),

    /// The client was built without credentials.
    #[error("Credentials are required")]
    MissingCredentials,
}

impl ClientError {
    /// Check if Keystone actively rejected the request (4xx status).
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::UnexpectedStatus { status, .. } if (400..500).contains(status))
    }

    /// Check if the failure happened below HTTP semantics (connect, TLS,
    /// timeout) rather than in the exchange itself.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_))
    }
}
