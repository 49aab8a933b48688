//! HTTP client for the Figma files endpoint.

use serde_json::Value;
use thiserror::Error;
use tracing::info;

const DEFAULT_BASE_URL: &str = "https://api.figma.com";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no file key found in URL: {0}")]
    BadUrl(String),
}

/// Pull the alphanumeric file key out of a Figma share URL.
///
/// Expects the `figma.com/file/<KEY>/...` form.
pub fn extract_file_key(url: &str) -> Option<String> {
    let rest = url.split("figma.com/file/").nth(1)?;
    let key: String = rest
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect();
    if key.is_empty() { None } else { Some(key) }
}

/// Client for fetching design documents from the Figma REST API.
pub struct FigmaClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl FigmaClient {
    /// Create a client using the public Figma API endpoint.
    pub fn new(token: String) -> Self {
        Self::with_base_url(token, DEFAULT_BASE_URL.to_string())
    }

    /// Create a client against a custom endpoint (tests, proxies).
    ///
    /// `base_url` should be like `https://api.figma.com` (no trailing slash).
    pub fn with_base_url(token: String, base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    /// Fetch the full document tree for a file key.
    ///
    /// Authentication is the `X-Figma-Token` header; transport and retry
    /// policy beyond reqwest's defaults are the caller's concern.
    pub async fn get_file(&self, file_key: &str) -> Result<Value, ApiError> {
        let url = format!("{}/v1/files/{file_key}", self.base_url);

        info!(url = %url, "fetching design document");
        let resp = self
            .client
            .get(&url)
            .header("X-Figma-Token", &self.token)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp.text().await?;
        let tree: Value = serde_json::from_str(&body)?;
        info!(file_key = %file_key, "fetched design document");
        Ok(tree)
    }
}
