use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Complete adapter configuration, as loaded from a TOML file
#[derive(Debug, Clone, Deserialize)]
pub struct AdapterConfig {
    pub plugin: PluginConfig,
    #[serde(default)]
    pub user: UserConfig,
    #[serde(default)]
    pub endpoints: EndpointConfig,
}

/// OAuth application credentials supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_url: String,
}

/// Per-user record stored by the host.
///
/// Fields the adapter does not know about are kept in `extra` and written
/// back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserConfig {
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub access_token: String,

    /// Upstream account id, filled in by profile enrichment
    #[serde(
        default,
        deserialize_with = "optional_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserConfig {
    pub fn new(username: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            access_token: access_token.into(),
            ..Self::default()
        }
    }

    /// Returns a copy with `username` and `id` overwritten from a fetched
    /// profile. Every other field is preserved.
    pub fn with_profile(&self, username: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            id: Some(id.into()),
            ..self.clone()
        }
    }
}

/// Optional upstream endpoint overrides (mock servers, enterprise hosts)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EndpointConfig {
    #[serde(default)]
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub oauth_base_url: Option<String>,
}

/// Accept ids as either strings or numbers.
pub fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {}",
            other
        ))),
    }
}

/// Like [`string_or_number`], with `null` read as `None`.
pub fn optional_string_or_number<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected string or number, got {}",
            other
        ))),
    }
}

/// Load configuration from TOML file
pub fn load_config(path: &str) -> Result<AdapterConfig> {
    let contents =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read config file {}", path))?;
    let config: AdapterConfig =
        toml::from_str(&contents).with_context(|| format!("Failed to parse config file {}", path))?;
    tracing::debug!(path = %path, username = %config.user.username, "Configuration loaded");
    Ok(config)
}
