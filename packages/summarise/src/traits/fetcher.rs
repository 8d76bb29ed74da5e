//! Fetch seam for raw page markup.

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::FetchResult;
use crate::types::RawDocument;

/// Fetches raw markup for a URL.
///
/// Implementations:
/// - `HttpFetcher` - plain HTTP(S) via reqwest
/// - `MockFetcher` - canned pages for testing
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the page at `url`.
    ///
    /// Any failure (network, non-2xx, timeout) is terminal for the request;
    /// the pipeline performs no retries of its own.
    async fn fetch(&self, url: &str) -> FetchResult<RawDocument>;
}

#[async_trait]
impl<T: PageFetcher + ?Sized> PageFetcher for Arc<T> {
    async fn fetch(&self, url: &str) -> FetchResult<RawDocument> {
        (**self).fetch(url).await
    }
}
