//! HTTP-based page fetcher.

use async_trait::async_trait;
use tracing::{debug, warn};
use url::Url;

use crate::error::{FetchError, FetchResult};
use crate::traits::PageFetcher;
use crate::types::RawDocument;

/// Fetches pages over plain HTTP(S) with reqwest.
///
/// No retries and no policy beyond the client's 30 second timeout; the
/// deployment environment owns outer-level timeout and retry decisions.
pub struct HttpFetcher {
    client: reqwest::Client,
    user_agent: String,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpFetcher {
    /// Create a new HTTP fetcher with default settings.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
            user_agent: "SummariseBot/1.0".to_string(),
        }
    }

    /// Set a custom user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Use a preconfigured HTTP client.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<RawDocument> {
        Url::parse(url).map_err(|_| FetchError::InvalidUrl {
            url: url.to_string(),
        })?;

        debug!(url = %url, "HTTP fetch starting");
        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "HTTP request failed");
                FetchError::Http(Box::new(e))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let html = response
            .text()
            .await
            .map_err(|e| FetchError::Http(Box::new(e)))?;

        debug!(url = %url, bytes = html.len(), "HTTP fetch complete");
        Ok(RawDocument::new(url, html))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_url_rejected_without_request() {
        let fetcher = HttpFetcher::new();

        match fetcher.fetch("not a url").await {
            Err(FetchError::InvalidUrl { url }) => assert_eq!(url, "not a url"),
            other => panic!("expected InvalidUrl, got {:?}", other),
        }
    }
}
