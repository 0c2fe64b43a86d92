//! Capabilities the host application injects into the adapter.
//!
//! The adapter never owns a network stack or a clock-parsing policy: it calls
//! through [`HostCapabilities`]. [`ReqwestHost`] is the production
//! implementation; tests swap in an in-memory fake.

use crate::error::{ActivityError, Result};
use async_trait::async_trait;
use chrono::DateTime;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::sync::Arc;

const USER_AGENT: &str = "github-connector/1.0";

/// Networking and parsing primitives supplied by the host.
///
/// Sequence utilities are not part of the contract; the adapter uses
/// iterators directly.
#[async_trait]
pub trait HostCapabilities: Send + Sync {
    /// GET `url` with the given headers and query parameters, returning the JSON body.
    async fn http_get(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        params: &[(&str, &str)],
    ) -> Result<Value>;

    /// POST a JSON `body` to `url`, returning the JSON response body.
    async fn http_post(&self, url: &str, headers: &[(&str, &str)], body: &Value) -> Result<Value>;

    /// Convert an upstream timestamp into Unix epoch milliseconds.
    fn parse_timestamp(&self, value: &str) -> Result<i64> {
        parse_rfc3339_millis(value)
    }
}

#[async_trait]
impl<H: HostCapabilities + ?Sized> HostCapabilities for Arc<H> {
    async fn http_get(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        params: &[(&str, &str)],
    ) -> Result<Value> {
        (**self).http_get(url, headers, params).await
    }

    async fn http_post(&self, url: &str, headers: &[(&str, &str)], body: &Value) -> Result<Value> {
        (**self).http_post(url, headers, body).await
    }

    fn parse_timestamp(&self, value: &str) -> Result<i64> {
        (**self).parse_timestamp(value)
    }
}

/// Parse an RFC 3339 timestamp (`2020-01-01T00:00:00Z`) into epoch millis.
pub fn parse_rfc3339_millis(value: &str) -> Result<i64> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.timestamp_millis())
        .map_err(|e| ActivityError::InvalidTimestamp {
            value: value.to_string(),
            reason: e.to_string(),
        })
}

/// [`HostCapabilities`] backed by a `reqwest` client.
///
/// No retries or timeouts beyond the client defaults.
#[derive(Clone)]
pub struct ReqwestHost {
    http_client: Client,
}

impl ReqwestHost {
    pub fn new() -> Result<Self> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(ActivityError::ClientBuild)?;
        Ok(Self { http_client })
    }

    /// Wrap an existing client (shared connection pool, custom TLS, ...).
    pub fn with_client(http_client: Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl HostCapabilities for ReqwestHost {
    async fn http_get(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        params: &[(&str, &str)],
    ) -> Result<Value> {
        let mut request = self.http_client.get(url).query(params);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        tracing::debug!(url = %url, "GET");
        let response = request
            .send()
            .await
            .map_err(|e| ActivityError::transport(url, e))?;

        check_response_status(url, &response)?;
        response
            .json::<Value>()
            .await
            .map_err(|e| ActivityError::decode(url, e))
    }

    async fn http_post(&self, url: &str, headers: &[(&str, &str)], body: &Value) -> Result<Value> {
        let mut request = self.http_client.post(url).json(body);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        tracing::debug!(url = %url, "POST");
        let response = request
            .send()
            .await
            .map_err(|e| ActivityError::transport(url, e))?;

        check_response_status(url, &response)?;
        response
            .json::<Value>()
            .await
            .map_err(|e| ActivityError::decode(url, e))
    }
}

/// Check the response status and map known error codes to descriptive errors.
///
/// - 401 → auth error (token expired or invalid)
/// - 403 → rate limit (logs X-RateLimit-Remaining)
/// - Other non-2xx → generic API error
fn check_response_status(url: &str, response: &reqwest::Response) -> Result<()> {
    match response.status() {
        StatusCode::UNAUTHORIZED => Err(ActivityError::Unauthorized),
        StatusCode::FORBIDDEN => {
            let remaining = response
                .headers()
                .get("X-RateLimit-Remaining")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(0);
            tracing::warn!(url = %url, remaining, "GitHub rate limit hit");
            Err(ActivityError::RateLimited { remaining })
        }
        s if !s.is_success() => Err(ActivityError::Status {
            url: url.to_string(),
            status: s.as_u16(),
        }),
        _ => Ok(()),
    }
}
