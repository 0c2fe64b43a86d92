use gamify::config::string_or_number;
use serde::Deserialize;
use serde_json::Value;

/// One entry of `GET /users/{username}/events`.
///
/// Only the discriminant is trusted; everything else is checked when the
/// record is classified.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubActivity {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub created_at: Option<String>,
    /// Commit count of a push, when the feed flattens it onto the record
    #[serde(default)]
    pub distinct_size: Option<Value>,
    #[serde(default)]
    pub payload: Value,
}

impl GitHubActivity {
    /// Distinct commit count of a push: top-level `distinct_size` first,
    /// then `payload.distinct_size`.
    pub fn push_size(&self) -> Option<&Value> {
        self.distinct_size
            .as_ref()
            .filter(|v| !v.is_null())
            .or_else(|| self.payload.get("distinct_size").filter(|v| !v.is_null()))
    }
}

/// Authenticated user profile from `GET /user`.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubUser {
    pub login: String,
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
}

/// Body of the OAuth token endpoint.
///
/// GitHub reports a bad or expired code with a 200 and `error` fields
/// instead of a token.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
}
