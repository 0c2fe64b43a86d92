use crate::error::Result;
use crate::types::AuthorizationResponse;
use async_trait::async_trait;
use gamify::{EventTypeCatalog, NormalizedEvent, UserConfig};

/// Interface a gamification host drives to integrate an activity source.
///
/// Connectors are stateless: configuration and the stored user record are
/// supplied at construction, and every call works only from those inputs.
/// Calls may run in any order or in parallel.
///
/// # Lifecycle
/// 1. Host sends the user to `authorization_url()`
/// 2. Provider redirects back with a code; host calls `access_token(code)`
/// 3. Host stores the token and calls `edit_user_config()` to fill in the profile
/// 4. Host calls `events()` on its own schedule and scores them using `event_types()`
///
/// # Example
/// ```no_run
/// use github_connector::{AuthorizationResponse, Connector, Result};
/// use async_trait::async_trait;
/// use gamify::{EventTypeCatalog, NormalizedEvent, UserConfig};
///
/// struct MyConnector {
///     user: UserConfig,
/// }
///
/// #[async_trait]
/// impl Connector for MyConnector {
///     fn name(&self) -> &str {
///         "myservice"
///     }
///
///     fn authorization_url(&self) -> String {
///         "https://example.com/oauth/authorize?client_id=abc".to_string()
///     }
///
///     async fn access_token(&self, response: &AuthorizationResponse) -> Result<String> {
///         Ok(response.code.clone())
///     }
///
///     async fn edit_user_config(&self) -> Result<UserConfig> {
///         Ok(self.user.clone())
///     }
///
///     async fn events(&self) -> Result<Vec<NormalizedEvent>> {
///         Ok(vec![])
///     }
///
///     fn event_types(&self) -> EventTypeCatalog {
///         EventTypeCatalog
///     }
/// }
/// ```
#[async_trait]
pub trait Connector: Send + Sync {
    /// Returns the unique identifier for this connector (e.g., "github").
    fn name(&self) -> &str;

    /// Returns the provider URL the user visits to grant access.
    ///
    /// Pure: identical configuration always yields the identical URL.
    fn authorization_url(&self) -> String;

    /// Exchanges an authorization code for an access token.
    ///
    /// # Returns
    /// * `Ok(String)` - Token as issued by the provider
    /// * `Err(...)` - Transport failure or a rejected code
    async fn access_token(&self, response: &AuthorizationResponse) -> Result<String>;

    /// Fetches the user's profile and returns the stored user record with the
    /// profile fields merged in. Other fields are preserved.
    async fn edit_user_config(&self) -> Result<UserConfig>;

    /// Fetches recent activity and returns normalized events in feed order.
    ///
    /// # Error Handling
    /// - Upstream failures propagate unchanged
    /// - A malformed tracked activity fails the whole call
    async fn events(&self) -> Result<Vec<NormalizedEvent>>;

    /// Returns the catalog of event types this connector can emit.
    fn event_types(&self) -> EventTypeCatalog;
}
