//! Token issuance endpoint.

use reqwest::{Client, StatusCode, header};
use tracing::{debug, warn};

use crate::error::{ClientError, Result};
use crate::models::{AuthRequest, AuthResponse};

/// Response header carrying the issued bearer token.
pub const SUBJECT_TOKEN_HEADER: &str = "X-Subject-Token";

/// A token issued by Keystone, with the decoded response body.
pub struct IssuedToken {
    pub subject_token: String,
    pub response: AuthResponse,
}

/// POST a token request to `auth_url` and decode the result.
///
/// The URL is used exactly as configured. Only 201 Created is accepted;
/// the body of any other status is not read.
pub async fn issue_token(
    client: &Client,
    auth_url: &str,
    request: &AuthRequest,
) -> Result<IssuedToken> {
    let body = serde_json::to_string(request).map_err(ClientError::Serialize)?;

    debug!(url = auth_url, "requesting token from Keystone");
    let response = client
        .post(auth_url)
        .header(header::ACCEPT, "application/json")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await?;

    let status = response.status();
    if status != StatusCode::CREATED {
        warn!(status = status.as_u16(), url = auth_url, "token request rejected");
        return Err(ClientError::UnexpectedStatus {
            status: status.as_u16(),
            url: response.url().to_string(),
        });
    }

    let subject_token = response
        .headers()
        .get(SUBJECT_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .filter(|token| !token.is_empty());
    let Some(subject_token) = subject_token else {
        warn!(url = auth_url, "201 response without an X-Subject-Token header");
        return Err(ClientError::MissingToken);
    };

    let text = response.text().await?;
    let decoded: AuthResponse = serde_json::from_str(&text).map_err(|e| {
        warn!(error = %e, "token response body is not valid JSON");
        ClientError::InvalidResponse(e.to_string())
    })?;

    Ok(IssuedToken {
        subject_token,
        response: decoded,
    })
}
