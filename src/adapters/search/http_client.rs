//! HTTP client for the external hybrid search service.
//!
//! The service fuses lexical and vector rankings on its side and returns
//! documents already ordered by its own score. This adapter deserializes
//! the hits as received; it never re-ranks, filters, or deduplicates.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Serialize;
use std::time::Duration;

use crate::domain::DocumentRecord;
use crate::ports::{DocumentSearch, SearchError};

/// Configuration for the hybrid search HTTP client.
#[derive(Debug, Clone)]
pub struct HttpSearchConfig {
    /// Base URL of the search service.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl HttpSearchConfig {
    /// Creates a new configuration for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Hybrid search service client.
pub struct HttpSearchClient {
    config: HttpSearchConfig,
    client: Client,
}

impl HttpSearchClient {
    /// Creates a new client with the given configuration.
    pub fn new(config: HttpSearchConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.config.base_url)
    }

    async fn handle_response_status(&self, response: Response) -> Result<Response, SearchError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();
        Err(SearchError::upstream(status.as_u16(), error_body))
    }
}

#[async_trait]
impl DocumentSearch for HttpSearchClient {
    async fn search(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<DocumentRecord>, SearchError> {
        let request = SearchRequest { query, limit };

        let response = self
            .client
            .post(self.search_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SearchError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    SearchError::network(format!("Connection failed: {}", e))
                } else {
                    SearchError::network(e.to_string())
                }
            })?;

        let response = self.handle_response_status(response).await?;

        response
            .json::<Vec<DocumentRecord>>()
            .await
            .map_err(|e| SearchError::parse(format!("Failed to parse search results: {}", e)))
    }
}

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
    limit: usize,
}
