use serde::{Deserialize, Serialize};

/// Query parameters the OAuth provider appends to the redirect URL.
///
/// # Example
/// ```
/// use github_connector::AuthorizationResponse;
///
/// let response: AuthorizationResponse = serde_json::from_str(r#"{"code": "abc123"}"#).unwrap();
/// assert_eq!(response.code, "abc123");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationResponse {
    /// Single-use authorization code to exchange for an access token
    pub code: String,
}

impl AuthorizationResponse {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}
