pub mod classify;
pub mod decode;
pub mod endpoints;

use std::time::Duration;

use reqwest::Client;

use crate::error::Result;
use crate::token::Token;

/// Raw HTTP outcome: status code and body captured verbatim, with no
/// interpretation of success or failure.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// HTTP transport for the Instagram REST API.
///
/// Holds no mutable state between calls; the inner `reqwest::Client`
/// reuses connections across requests.
#[derive(Debug, Clone)]
pub struct InstagramHttpClient {
    client: Client,
    base_url: String,
}

impl InstagramHttpClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build a transport with a per-request timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Issue exactly one GET with the access token attached as a query
    /// parameter, and capture status and body verbatim. No retries; any
    /// connection-level failure surfaces as a transport error.
    pub async fn get_raw(
        &self,
        path: &str,
        query: &[(&str, &str)],
        token: &Token,
    ) -> Result<RawResponse> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "sending request");

        let resp = self
            .client
            .get(&url)
            .query(query)
            .query(&[("access_token", token.access_token())])
            .send()
            .await?;

        let status = resp.status().as_u16();
        let body = resp.text().await?;
        tracing::debug!(status, bytes = body.len(), "received response");

        Ok(RawResponse { status, body })
    }

    /// The base URL this transport was built with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
