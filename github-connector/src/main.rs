use anyhow::{bail, Context, Result};
use gamify::{AdapterConfig, UserConfig};
use github_connector::connectors::github::config::plugin_config_from_env;
use github_connector::{AuthorizationResponse, Connector, GitHubConnector, ReqwestHost};
use std::path::Path;
use tracing::info;

const USAGE: &str = "usage: github-events <authorize-url | token <code> | profile | events | event-types>";

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries JSON output only
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "github_connector=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("events");

    let config = load_adapter_config()?;
    let host = ReqwestHost::new().context("Failed to initialize HTTP client")?;
    let connector = GitHubConnector::from_config(host, config);

    match command {
        "authorize-url" => println!("{}", connector.authorization_url()),
        "token" => {
            let code = args.get(1).context("token requires an authorization code")?;
            let token = connector
                .access_token(&AuthorizationResponse::new(code.as_str()))
                .await
                .context("Token exchange failed")?;
            println!("{}", token);
        }
        "profile" => {
            let user = connector
                .edit_user_config()
                .await
                .context("Failed to fetch GitHub profile")?;
            println!("{}", serde_json::to_string_pretty(&user)?);
        }
        "events" => {
            let events = connector
                .events()
                .await
                .context("Failed to fetch GitHub events")?;
            info!(count = events.len(), "Events fetched");
            println!("{}", serde_json::to_string_pretty(&events)?);
        }
        "event-types" => {
            println!("{}", serde_json::to_string_pretty(&connector.event_types())?);
        }
        other => bail!("unknown command '{}'\n{}", other, USAGE),
    }

    Ok(())
}

/// Read `GITHUB_EVENTS_CONFIG` (default `github-events.toml`). Without a
/// config file, fall back to `GITHUB_OAUTH_*`, `GITHUB_USERNAME` and
/// `GITHUB_TOKEN` from the environment.
fn load_adapter_config() -> Result<AdapterConfig> {
    let path = std::env::var("GITHUB_EVENTS_CONFIG")
        .unwrap_or_else(|_| "github-events.toml".to_string());

    if Path::new(&path).exists() {
        info!(path = %path, "Loading configuration file");
        return gamify::load_config(&path);
    }

    info!(path = %path, "Config file not found, reading environment");
    let plugin = plugin_config_from_env()?;
    let user = UserConfig::new(
        std::env::var("GITHUB_USERNAME").unwrap_or_default(),
        std::env::var("GITHUB_TOKEN").unwrap_or_default(),
    );
    Ok(AdapterConfig {
        plugin,
        user,
        endpoints: Default::default(),
    })
}
