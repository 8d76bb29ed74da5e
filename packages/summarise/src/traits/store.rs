//! Storage seams for the two persistence sinks.
//!
//! The storage layer is split into focused traits, one per sink:
//! - `SummaryStore`: structured records (url, summary, urdu_summary)
//! - `DocumentStore`: loosely-structured full-text documents
//!
//! The two writes are independent and non-atomic. No transaction spans
//! them, and a summary already stored when the full-text write fails stays
//! stored.

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::StoreResult;
use crate::types::{FullTextRecord, SummaryRecord};

/// Structured-record sink for summaries.
#[async_trait]
pub trait SummaryStore: Send + Sync {
    /// Insert one summary record.
    ///
    /// Repeated inserts for the same URL are allowed; the pipeline does not
    /// deduplicate.
    async fn insert_summary(&self, record: &SummaryRecord) -> StoreResult<()>;
}

/// Document sink for extracted full text.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert one full-text document.
    async fn insert_full_text(&self, record: &FullTextRecord) -> StoreResult<()>;
}

// Blanket implementations so runtime-selected stores can flow through the
// generic pipeline as Arc<dyn SummaryStore> / Arc<dyn DocumentStore>.

#[async_trait]
impl<T: SummaryStore + ?Sized> SummaryStore for Arc<T> {
    async fn insert_summary(&self, record: &SummaryRecord) -> StoreResult<()> {
        (**self).insert_summary(record).await
    }
}

#[async_trait]
impl<T: DocumentStore + ?Sized> DocumentStore for Arc<T> {
    async fn insert_full_text(&self, record: &FullTextRecord) -> StoreResult<()> {
        (**self).insert_full_text(record).await
    }
}
