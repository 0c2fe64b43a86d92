//! GitHub connector - exposes a user's GitHub activity as gamification events.
//!
//! The host application owns networking, storage and scheduling. It hands the
//! connector its OAuth app settings, the stored user record and a set of
//! [`HostCapabilities`], and gets back authorization helpers and a normalized
//! event feed.
//!
//! # Architecture
//!
//! ```text
//!   GET /users/{username}/events  (via HostCapabilities::http_get)
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │       Filter                             │
//! │  - PublicEvent, PullRequestEvent,        │
//! │    PushEvent only; order preserved       │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │       Classify                           │
//! │  - timestamp → epoch millis              │
//! │  - canonical EventType + multiplier      │
//! └─────────────────────────────────────────┘
//!          ↓
//!   Vec<NormalizedEvent>  →  host scoring
//! ```
//!
//! # Core Types
//!
//! - [`Connector`] - Trait the host drives (auth URL, token, profile, events)
//! - [`GitHubConnector`] - GitHub implementation
//! - [`HostCapabilities`] - Injected HTTP and timestamp primitives
//! - [`ReqwestHost`] - `reqwest`-backed capabilities
//! - [`ActivityError`] - Every failure surfaced to the host
//!
//! # Fetching events
//!
//! ```no_run
//! use github_connector::{Connector, GitHubConnector, ReqwestHost};
//! use gamify::{PluginConfig, UserConfig};
//!
//! # async fn run() -> github_connector::Result<()> {
//! let plugin = PluginConfig {
//!     client_id: "client-id".to_string(),
//!     client_secret: "client-secret".to_string(),
//!     redirect_url: "http://localhost:3000/callback".to_string(),
//! };
//! let user = UserConfig::new("octocat", "gho_token");
//!
//! let connector = GitHubConnector::new(ReqwestHost::new()?, plugin, user);
//! for event in connector.events().await? {
//!     println!("{} x{}", event.event_type, event.multiplier);
//! }
//! # Ok(())
//! # }
//! ```

mod connector;
mod types;
pub mod connectors;
pub mod error;
pub mod host;

// Re-export public types
pub use connector::Connector;
pub use connectors::github::GitHubConnector;
pub use error::{ActivityError, Result};
pub use host::{HostCapabilities, ReqwestHost};
pub use types::AuthorizationResponse;

// Re-export the event model from the gamify crate for convenience
pub use gamify::{EventType, EventTypeCatalog, NormalizedEvent};
