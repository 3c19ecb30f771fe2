//! Search command implementation.

use crate::api::models::SearchRequest;
use crate::api::sites;
use crate::api::{SearchApi, SearchClient};
use crate::config::Config;
use crate::format::Formatter;
use anyhow::{Context, Result};
use tracing::{debug, info, warn};

/// Executes a product search against the backend.
pub struct SearchCommand {
    config: Config,
}

impl SearchCommand {
    /// Creates a new search command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Executes the search and returns formatted output.
    pub async fn execute(&self, query: &str) -> Result<String> {
        let client = SearchClient::new(&self.config).context("Failed to create HTTP client")?;

        self.execute_with_client(&client, query).await
    }

    /// Executes the search with a provided client (for testing).
    pub async fn execute_with_client(
        &self,
        client: &impl SearchApi,
        query: &str,
    ) -> Result<String> {
        info!("Searching for: {}", query);

        for site in &self.config.sites {
            if !sites::is_known(site) {
                warn!("Source site '{}' has no known extractor; the backend may skip it", site);
            }
        }

        let request = self.build_request(query);
        let response = client.search(&request).await?;

        info!("Backend returned {} products", response.count());
        if !response.debug.is_empty() {
            debug!("Backend debug: {:?}", response.debug);
        }

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_response(&response))
    }

    /// Builds the request from the query and configured defaults.
    fn build_request(&self, query: &str) -> SearchRequest {
        let mut request = SearchRequest::new(query);
        request.max_price = self.config.max_price;
        request.k = self.config.k;
        request.category_hint = self.config.category_hint.clone();

        if !self.config.sites.is_empty() {
            request.sites = Some(self.config.sites.clone());
        }

        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::ApiError;
    use crate::api::models::{SearchResponse, UIProduct};
    use crate::config::OutputFormat;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Mock search client recording the requests it receives.
    struct MockSearchClient {
        response: Option<SearchResponse>,
        requests: Mutex<Vec<SearchRequest>>,
    }

    impl MockSearchClient {
        fn new(response: SearchResponse) -> Self {
            Self { response: Some(response), requests: Mutex::new(Vec::new()) }
        }

        fn failing() -> Self {
            Self { response: None, requests: Mutex::new(Vec::new()) }
        }

        fn last_request(&self) -> SearchRequest {
            self.requests.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait]
    impl SearchApi for MockSearchClient {
        async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ApiError> {
            self.requests.lock().unwrap().push(request.clone());

            match &self.response {
                Some(response) => Ok(response.clone()),
                None => Err(ApiError::from_status(
                    reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                    Some("server error".to_string()),
                )),
            }
        }
    }

    fn make_product(name: &str, price: &str) -> UIProduct {
        UIProduct {
            name: name.to_string(),
            price: price.to_string(),
            rating: Some(4.0),
            specifications: Vec::new(),
            link: format!("https://example.com/p/{}", name),
            image: None,
            source: "amazon".to_string(),
            review_count: Some(10),
            raw_title: None,
            category: None,
        }
    }

    fn make_response(products: Vec<UIProduct>, summary: &str) -> SearchResponse {
        SearchResponse {
            results: products,
            summary: summary.to_string(),
            debug: serde_json::Map::new(),
            top_k: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_search_command_basic() {
        let response = make_response(
            vec![make_product("Widget One", "1999"), make_product("Widget Two", "2999")],
            "two widgets",
        );
        let client = MockSearchClient::new(response);
        let cmd = SearchCommand::new(Config::default());

        let output = cmd.execute_with_client(&client, "widget").await.unwrap();
        assert!(output.contains("Widget One"));
        assert!(output.contains("Widget Two"));
        assert!(output.contains("1999"));
        assert!(output.contains("Summary: two widgets"));
    }

    #[tokio::test]
    async fn test_search_command_builds_request_from_config() {
        let client = MockSearchClient::new(make_response(Vec::new(), ""));
        let config = Config {
            max_price: Some(50000),
            sites: vec!["amazon".to_string(), "flipkart".to_string()],
            k: Some(6),
            category_hint: Some("electronics".to_string()),
            ..Config::default()
        };

        let cmd = SearchCommand::new(config);
        cmd.execute_with_client(&client, "laptop").await.unwrap();

        let request = client.last_request();
        assert_eq!(request.query, "laptop");
        assert_eq!(request.max_price, Some(50000));
        assert_eq!(request.sites.as_deref(), Some(["amazon".to_string(), "flipkart".to_string()].as_slice()));
        assert_eq!(request.k, Some(6));
        assert_eq!(request.category_hint.as_deref(), Some("electronics"));
    }

    #[tokio::test]
    async fn test_search_command_no_sites_means_all() {
        let client = MockSearchClient::new(make_response(Vec::new(), ""));
        let cmd = SearchCommand::new(Config::default());

        cmd.execute_with_client(&client, "anything").await.unwrap();

        // Empty configured sites must not narrow the search
        assert!(client.last_request().sites.is_none());
    }

    #[tokio::test]
    async fn test_search_command_empty_results() {
        let client = MockSearchClient::new(make_response(Vec::new(), ""));
        let cmd = SearchCommand::new(Config::default());

        let output = cmd.execute_with_client(&client, "nonexistent").await.unwrap();
        assert!(output.contains("No products found"));
    }

    #[tokio::test]
    async fn test_search_command_json_format() {
        let response = make_response(vec![make_product("Widget", "999")], "one widget");
        let client = MockSearchClient::new(response);
        let config = Config { format: OutputFormat::Json, ..Config::default() };

        let cmd = SearchCommand::new(config);
        let output = cmd.execute_with_client(&client, "widget").await.unwrap();

        // JSON output is the whole response envelope
        assert!(output.starts_with('{'));
        assert!(output.contains("\"results\""));
        assert!(output.contains("\"summary\""));
        assert!(output.contains("one widget"));
    }

    #[tokio::test]
    async fn test_search_command_propagates_backend_error() {
        let client = MockSearchClient::failing();
        let cmd = SearchCommand::new(Config::default());

        let err = cmd.execute_with_client(&client, "widget").await.unwrap_err();
        assert_eq!(err.to_string(), "server error");
    }

    #[tokio::test]
    async fn test_search_command_unknown_site_still_sent() {
        let client = MockSearchClient::new(make_response(Vec::new(), ""));
        let config = Config { sites: vec!["ebay".to_string()], ..Config::default() };

        let cmd = SearchCommand::new(config);
        cmd.execute_with_client(&client, "widget").await.unwrap();

        // Unknown sites are warned about but passed through untouched
        assert_eq!(client.last_request().sites.as_deref(), Some(["ebay".to_string()].as_slice()));
    }
}
