//! Raw fetched documents.

use chrono::{DateTime, Utc};

/// A fetched page: opaque markup plus its source URL.
///
/// Immutable once fetched; the downstream stages only read it. Every entity
/// derived from it lives and dies within a single pipeline invocation.
#[derive(Debug, Clone)]
pub struct RawDocument {
    /// URL the markup was fetched from
    pub url: String,

    /// Raw markup as returned by the fetch collaborator
    pub html: String,

    /// When the fetch completed
    pub fetched_at: DateTime<Utc>,
}

impl RawDocument {
    /// Create a new raw document fetched just now.
    pub fn new(url: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            html: html.into(),
            fetched_at: Utc::now(),
        }
    }

    /// Set the fetched timestamp.
    pub fn with_fetched_at(mut self, fetched_at: DateTime<Utc>) -> Self {
        self.fetched_at = fetched_at;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_document_builder() {
        let document = RawDocument::new("https://example.com", "<html></html>");

        assert_eq!(document.url, "https://example.com");
        assert_eq!(document.html, "<html></html>");
    }
}
