//! HTTP client for the product-search backend.

use crate::api::error::ApiError;
use crate::api::models::{SearchRequest, SearchResponse};
use crate::api::normalize::normalize_response;
use crate::config::Config;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Default backend endpoint for local development.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Trait for running searches - enables mocking for tests.
#[async_trait]
pub trait SearchApi: Send + Sync {
    /// Posts the request and returns the response with sanitized prices.
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ApiError>;
}

/// Client for the backend's `/api/search` endpoint.
///
/// Stateless and reentrant: each call performs exactly one request, with no
/// retry, caching, or request validation. Concurrent calls are independent.
pub struct SearchClient {
    client: reqwest::Client,
    base_url: String,
}

impl SearchClient {
    /// Creates a client against the configured base URL.
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        Self::with_base_url(config, None)
    }

    /// Creates a client with an explicit base URL override (for testing).
    ///
    /// Resolution order: the override, then a non-empty configured value,
    /// then [`DEFAULT_BASE_URL`].
    pub fn with_base_url(config: &Config, base_url: Option<String>) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        let base_url = base_url
            .or_else(|| config.base_url.clone().filter(|url| !url.is_empty()))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self { client, base_url })
    }

    /// Returns the resolved base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl SearchApi for SearchClient {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ApiError> {
        let url = format!("{}/api/search", self.base_url);
        debug!("POST {} query={:?}", url, request.query);

        let response = self.client.post(&url).json(request).send().await?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.ok();
            return Err(ApiError::from_status(status, body));
        }

        let body = response.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;

        Ok(normalize_response(parsed))
    }
}
