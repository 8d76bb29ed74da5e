//! Stand-in store for deployments without persistence credentials.

use async_trait::async_trait;
use tracing::warn;

use crate::error::{StoreError, StoreResult};
use crate::traits::{DocumentStore, SummaryStore};
use crate::types::{FullTextRecord, SummaryRecord};

/// A store injected when credentials are not configured.
///
/// Every insert fails with [`StoreError::Credentials`]. A misconfigured
/// deployment still boots and serves; the failure surfaces per request at
/// the persistence stage, so fetch and extraction errors keep taking
/// precedence over the configuration error.
pub struct UnconfiguredStore {
    what: &'static str,
}

impl UnconfiguredStore {
    /// Stand-in for the structured-record store.
    pub fn summaries() -> Self {
        Self {
            what: "summary store",
        }
    }

    /// Stand-in for the document store.
    pub fn documents() -> Self {
        Self {
            what: "document store",
        }
    }
}

#[async_trait]
impl SummaryStore for UnconfiguredStore {
    async fn insert_summary(&self, _record: &SummaryRecord) -> StoreResult<()> {
        warn!("{} called but credentials not configured", self.what);
        Err(StoreError::Credentials)
    }
}

#[async_trait]
impl DocumentStore for UnconfiguredStore {
    async fn insert_full_text(&self, _record: &FullTextRecord) -> StoreResult<()> {
        warn!("{} called but credentials not configured", self.what);
        Err(StoreError::Credentials)
    }
}
