//! In-memory storage implementation for testing and development.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::error::StoreResult;
use crate::traits::{DocumentStore, SummaryStore};
use crate::types::{FullTextRecord, SummaryRecord};

/// In-memory sink implementing both store traits.
///
/// Useful for testing and development. Not suitable for production as data
/// is lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    summaries: RwLock<Vec<SummaryRecord>>,
    full_texts: RwLock<Vec<FullTextRecord>>,
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored records.
    pub fn clear(&self) {
        self.summaries.write().unwrap().clear();
        self.full_texts.write().unwrap().clear();
    }

    /// Number of stored summary records.
    pub fn summary_count(&self) -> usize {
        self.summaries.read().unwrap().len()
    }

    /// Number of stored full-text documents.
    pub fn full_text_count(&self) -> usize {
        self.full_texts.read().unwrap().len()
    }

    /// Snapshot of the stored summary records, in insertion order.
    pub fn summaries(&self) -> Vec<SummaryRecord> {
        self.summaries.read().unwrap().clone()
    }

    /// Snapshot of the stored full-text documents, in insertion order.
    pub fn full_texts(&self) -> Vec<FullTextRecord> {
        self.full_texts.read().unwrap().clone()
    }
}

#[async_trait]
impl SummaryStore for MemoryStore {
    async fn insert_summary(&self, record: &SummaryRecord) -> StoreResult<()> {
        self.summaries.write().unwrap().push(record.clone());
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert_full_text(&self, record: &FullTextRecord) -> StoreResult<()> {
        self.full_texts.write().unwrap().push(record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_inserts_accumulate() {
        let store = MemoryStore::new();
        let record = SummaryRecord {
            url: "https://example.com".to_string(),
            summary: "A summary.".to_string(),
            urdu_summary: "خلاصہ".to_string(),
        };

        store.insert_summary(&record).await.unwrap();
        store.insert_summary(&record).await.unwrap();

        assert_eq!(store.summary_count(), 2);
        assert_eq!(store.summaries()[0], record);

        store.clear();
        assert_eq!(store.summary_count(), 0);
    }
}
