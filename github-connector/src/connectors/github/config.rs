use anyhow::{Context, Result};
use gamify::PluginConfig;

pub const API_BASE_URL: &str = "https://api.github.com";
pub const OAUTH_BASE_URL: &str = "https://github.com";
pub const AUTHORIZE_PATH: &str = "/login/oauth/authorize";
pub const TOKEN_PATH: &str = "/login/oauth/access_token";
pub const SCOPE: &str = "user";

/// Load GitHub OAuth app settings from environment variables:
/// - `GITHUB_OAUTH_CLIENT_ID`
/// - `GITHUB_OAUTH_CLIENT_SECRET`
/// - `GITHUB_OAUTH_REDIRECT_URL`
pub fn plugin_config_from_env() -> Result<PluginConfig> {
    let client_id =
        std::env::var("GITHUB_OAUTH_CLIENT_ID").context("GITHUB_OAUTH_CLIENT_ID not set")?;
    let client_secret = std::env::var("GITHUB_OAUTH_CLIENT_SECRET")
        .context("GITHUB_OAUTH_CLIENT_SECRET not set")?;
    let redirect_url =
        std::env::var("GITHUB_OAUTH_REDIRECT_URL").context("GITHUB_OAUTH_REDIRECT_URL not set")?;
    Ok(PluginConfig {
        client_id,
        client_secret,
        redirect_url,
    })
}
