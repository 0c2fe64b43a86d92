pub mod api;
pub mod config;
pub mod transformer;

use crate::error::{ActivityError, Result};
use crate::host::HostCapabilities;
use crate::{AuthorizationResponse, Connector};
use async_trait::async_trait;
use gamify::{AdapterConfig, EventTypeCatalog, NormalizedEvent, PluginConfig, UserConfig};
use serde_json::json;

use self::api::{GitHubActivity, GitHubUser, TokenResponse};
use self::config::{API_BASE_URL, AUTHORIZE_PATH, OAUTH_BASE_URL, SCOPE, TOKEN_PATH};
use self::transformer::activities_to_events;

/// GitHub connector: turns a user's public activity feed into
/// gamification events.
pub struct GitHubConnector<H> {
    host: H,
    plugin_config: PluginConfig,
    user_config: UserConfig,
    api_base_url: String,
    oauth_base_url: String,
}

impl<H: HostCapabilities> GitHubConnector<H> {
    /// Create a connector against the real GitHub endpoints.
    pub fn new(host: H, plugin_config: PluginConfig, user_config: UserConfig) -> Self {
        Self::with_base_urls(
            host,
            plugin_config,
            user_config,
            API_BASE_URL.to_string(),
            OAUTH_BASE_URL.to_string(),
        )
    }

    /// Create a connector with custom API and OAuth base URLs (for testing).
    pub fn with_base_urls(
        host: H,
        plugin_config: PluginConfig,
        user_config: UserConfig,
        api_base_url: String,
        oauth_base_url: String,
    ) -> Self {
        Self {
            host,
            plugin_config,
            user_config,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            oauth_base_url: oauth_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create a connector from a loaded config file, honoring endpoint overrides.
    pub fn from_config(host: H, config: AdapterConfig) -> Self {
        let api_base_url = config
            .endpoints
            .api_base_url
            .unwrap_or_else(|| API_BASE_URL.to_string());
        let oauth_base_url = config
            .endpoints
            .oauth_base_url
            .unwrap_or_else(|| OAUTH_BASE_URL.to_string());
        Self::with_base_urls(host, config.plugin, config.user, api_base_url, oauth_base_url)
    }

    pub fn user_config(&self) -> &UserConfig {
        &self.user_config
    }

    /// Fetch the raw public activity feed of the configured user.
    pub async fn fetch_activities(&self) -> Result<Vec<GitHubActivity>> {
        if self.user_config.username.is_empty() {
            return Err(ActivityError::MissingField("username"));
        }

        let url = format!(
            "{}/users/{}/events",
            self.api_base_url,
            urlencoding::encode(&self.user_config.username)
        );
        let body = self
            .host
            .http_get(&url, &[("Accept", "application/vnd.github+json")], &[])
            .await?;

        serde_json::from_value(body).map_err(|e| ActivityError::decode(&url, e))
    }

    /// Fetch the profile of the user owning the stored access token.
    pub async fn fetch_user(&self) -> Result<GitHubUser> {
        let url = format!("{}/user", self.api_base_url);
        let authorization = format!("Bearer {}", self.user_config.access_token);
        let body = self
            .host
            .http_get(
                &url,
                &[
                    ("Accept", "application/vnd.github+json"),
                    ("Authorization", authorization.as_str()),
                ],
                &[],
            )
            .await?;

        serde_json::from_value(body).map_err(|e| ActivityError::decode(&url, e))
    }
}

#[async_trait]
impl<H: HostCapabilities> Connector for GitHubConnector<H> {
    fn name(&self) -> &str {
        "github"
    }

    fn authorization_url(&self) -> String {
        format!(
            "{}{}?client_id={}&scope={}&redirect_uri={}",
            self.oauth_base_url,
            AUTHORIZE_PATH,
            urlencoding::encode(&self.plugin_config.client_id),
            SCOPE,
            urlencoding::encode(&self.plugin_config.redirect_url)
        )
    }

    async fn access_token(&self, response: &AuthorizationResponse) -> Result<String> {
        let url = format!("{}{}", self.oauth_base_url, TOKEN_PATH);
        let body = json!({
            "client_id": self.plugin_config.client_id,
            "client_secret": self.plugin_config.client_secret,
            "code": response.code,
            "redirect_uri": self.plugin_config.redirect_url,
        });

        tracing::debug!("Exchanging authorization code for token at {}", url);
        let body = self
            .host
            .http_post(&url, &[("Accept", "application/json")], &body)
            .await?;
        let token: TokenResponse =
            serde_json::from_value(body).map_err(|e| ActivityError::decode(&url, e))?;

        match token {
            TokenResponse {
                access_token: Some(access_token),
                scope,
                ..
            } => {
                tracing::debug!(scope = ?scope, "Token exchange successful");
                Ok(access_token)
            }
            TokenResponse {
                error: Some(error),
                error_description,
                ..
            } => {
                tracing::warn!(error = %error, "Token exchange rejected");
                Err(ActivityError::TokenExchange {
                    error,
                    description: error_description.unwrap_or_else(|| "Unknown error".to_string()),
                })
            }
            _ => Err(ActivityError::MissingField("access_token")),
        }
    }

    async fn edit_user_config(&self) -> Result<UserConfig> {
        let user = self.fetch_user().await?;
        tracing::info!(login = %user.login, id = %user.id, "GitHub profile fetched");
        Ok(self.user_config.with_profile(user.login, user.id))
    }

    async fn events(&self) -> Result<Vec<NormalizedEvent>> {
        let activities = self.fetch_activities().await?;
        let events = activities_to_events(&self.host, &activities)?;
        tracing::info!(
            username = %self.user_config.username,
            activities = activities.len(),
            events = events.len(),
            "GitHub activity normalized"
        );
        Ok(events)
    }

    fn event_types(&self) -> EventTypeCatalog {
        EventTypeCatalog
    }
}
