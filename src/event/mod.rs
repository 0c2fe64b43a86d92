use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

mod catalog;

pub use catalog::{EventTypeCatalog, EventTypeInfo};

/// Canonical event types a connector may emit.
///
/// The set is closed: every emitted [`NormalizedEvent`] carries one of these,
/// and each has an entry in the [`EventTypeCatalog`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    /// A private repository was made public
    RepositoryOpenSourced,
    /// A pull request was sent to a public repository
    PullRequestOpened,
    /// One or more commits were pushed to a public repository
    CommitsPushed,
}

impl EventType {
    /// All event types, in catalog order.
    pub const ALL: [EventType; 3] = [
        EventType::RepositoryOpenSourced,
        EventType::PullRequestOpened,
        EventType::CommitsPushed,
    ];

    /// Wire name, e.g. `COMMITS_PUSHED`.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::RepositoryOpenSourced => "REPOSITORY_OPEN_SOURCED",
            EventType::PullRequestOpened => "PULL_REQUEST_OPENED",
            EventType::CommitsPushed => "COMMITS_PUSHED",
        }
    }

    /// Human-readable description shown by the host.
    pub fn description(&self) -> &'static str {
        match self {
            EventType::RepositoryOpenSourced => "Private repo is open sourced",
            EventType::PullRequestOpened => "Pull request sent for a public repo",
            EventType::CommitsPushed => "One or more commits pushed to a public repo",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a name that is not a canonical event type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown event type '{0}'")]
pub struct UnknownEventType(pub String);

impl FromStr for EventType {
    type Err = UnknownEventType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownEventType(s.to_string()))
    }
}

/// A normalized, weighted activity event handed back to the host.
///
/// Serializes as `{"id", "timestamp", "type", "multiplier"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedEvent {
    /// Upstream activity id, carried through unchanged
    pub id: String,

    /// Unix epoch milliseconds of the upstream activity
    pub timestamp: i64,

    /// Canonical event type
    #[serde(rename = "type")]
    pub event_type: EventType,

    /// Reward weight (commit count for pushes, otherwise 1)
    pub multiplier: u64,
}

impl NormalizedEvent {
    pub fn new(id: impl Into<String>, timestamp: i64, event_type: EventType, multiplier: u64) -> Self {
        Self {
            id: id.into(),
            timestamp,
            event_type,
            multiplier,
        }
    }
}
