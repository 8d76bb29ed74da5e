//! Testing utilities including mock implementations.
//!
//! These are useful for exercising the pipeline without real network or
//! store calls.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{FetchError, FetchResult, StoreError, StoreResult};
use crate::traits::{DocumentStore, PageFetcher, SummaryStore};
use crate::types::{FullTextRecord, RawDocument, SummaryRecord};

/// A mock fetcher serving canned markup per URL.
///
/// URLs without a canned page fail with a 404 status error, so the same
/// mock covers both the happy path and fetch failures.
#[derive(Default)]
pub struct MockFetcher {
    pages: Arc<RwLock<HashMap<String, String>>>,

    /// Call tracking for assertions
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockFetcher {
    /// Create a mock with no canned pages (every fetch fails).
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `html` for `url`.
    pub fn with_page(self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.pages.write().unwrap().insert(url.into(), html.into());
        self
    }

    /// URLs fetched so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<RawDocument> {
        self.calls.write().unwrap().push(url.to_string());

        match self.pages.read().unwrap().get(url) {
            Some(html) => Ok(RawDocument::new(url, html.clone())),
            None => Err(FetchError::Status {
                status: 404,
                url: url.to_string(),
            }),
        }
    }
}

/// A store that rejects every insert with a backend error.
#[derive(Default)]
pub struct FailingStore;

impl FailingStore {
    /// Create a new failing store.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SummaryStore for FailingStore {
    async fn insert_summary(&self, _record: &SummaryRecord) -> StoreResult<()> {
        Err(StoreError::Backend("injected summary store failure".into()))
    }
}

#[async_trait]
impl DocumentStore for FailingStore {
    async fn insert_full_text(&self, _record: &FullTextRecord) -> StoreResult<()> {
        Err(StoreError::Backend(
            "injected document store failure".into(),
        ))
    }
}
