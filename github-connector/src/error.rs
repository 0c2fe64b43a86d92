use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors surfaced to the host by every adapter operation.
///
/// Nothing is recovered locally: a failed upstream call or a malformed
/// activity fails the whole operation.
#[derive(Debug, Error)]
pub enum ActivityError {
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: BoxError,
    },

    #[error("GitHub auth error: token expired or invalid")]
    Unauthorized,

    #[error("GitHub rate limit exceeded (X-RateLimit-Remaining: {remaining})")]
    RateLimited { remaining: u64 },

    #[error("GitHub API error: {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: BoxError,
    },

    #[error("token exchange failed: {error} ({description})")]
    TokenExchange { error: String, description: String },

    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("malformed activity {id}: {reason}")]
    MalformedActivity { id: String, reason: String },

    #[error("invalid timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },

    /// A record reached the classifier without passing the activity filter.
    #[error("activity type '{0}' is not tracked")]
    UntrackedActivity(String),
}

impl ActivityError {
    pub fn transport(url: &str, source: impl Into<BoxError>) -> Self {
        ActivityError::Transport {
            url: url.to_string(),
            source: source.into(),
        }
    }

    pub fn decode(url: &str, source: impl Into<BoxError>) -> Self {
        ActivityError::Decode {
            url: url.to_string(),
            source: source.into(),
        }
    }

    pub fn malformed(id: &str, reason: impl Into<String>) -> Self {
        ActivityError::MalformedActivity {
            id: id.to_string(),
            reason: reason.into(),
        }
    }

    /// True for failures of the upstream call itself (network, status, body).
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            ActivityError::Transport { .. }
                | ActivityError::Unauthorized
                | ActivityError::RateLimited { .. }
                | ActivityError::Status { .. }
                | ActivityError::Decode { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ActivityError>;
