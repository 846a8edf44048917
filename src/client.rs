//! HTTP client for the news search endpoint.

use async_trait::async_trait;
use reqwest::Client;

use crate::config::FeedConfig;
use crate::error::{classify_reqwest_error, FetchError};
use crate::models::{ResultPage, SearchRequest, SearchResponse};
use crate::traits::NewsSource;

/// Client for the paginated search endpoint.
///
/// Issues `GET {base_url}?q=..&country=..&page=..&pageSize=..` and decodes the
/// `{ articles, totalPages }` body.
#[derive(Debug, Clone)]
pub struct NewsClient {
    /// Search endpoint URL
    pub base_url: String,
    /// Reusable HTTP client
    client: Client,
}

impl NewsClient {
    /// Create a client from configuration, applying the request timeout.
    pub fn new(config: &FeedConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| FetchError::Other {
                message: e.to_string(),
            })?;
        Ok(Self {
            base_url: config.base_url.clone(),
            client,
        })
    }

    /// Create a client with default settings against a custom URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    /// Run one search request.
    pub async fn fetch_page(&self, request: &SearchRequest) -> Result<ResultPage, FetchError> {
        let response = self
            .client
            .get(&self.base_url)
            .header("Accept", "application/json")
            .query(request)
            .send()
            .await
            .map_err(|e| classify_reqwest_error(&e, &self.base_url))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| classify_reqwest_error(&e, &self.base_url))?;
        let parsed: SearchResponse = serde_json::from_slice(&body)?;

        tracing::debug!(
            q = %request.q,
            country = %request.country,
            page = request.page,
            articles = parsed.articles.len(),
            total_pages = parsed.total_pages,
            "Search response decoded"
        );

        Ok(parsed.into())
    }
}

#[async_trait]
impl NewsSource for NewsClient {
    async fn search(&self, request: &SearchRequest) -> Result<ResultPage, FetchError> {
        self.fetch_page(request).await
    }
}
