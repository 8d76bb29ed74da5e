//! Typed errors for the summarisation pipeline.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors from the fetch collaborator.
#[derive(Debug, Error)]
pub enum FetchError {
    /// URL did not parse
    #[error("invalid URL: {url}")]
    InvalidUrl { url: String },

    /// Transport-level failure (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Server answered with a non-success status
    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },
}

/// Errors from content extraction.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// No selector strategy produced any text
    #[error("no textual content found")]
    NoContent,

    /// Normalized text is below the minimum content length
    #[error("content too short: {length} characters")]
    TooShort { length: usize },
}

/// Errors from the persistence sinks.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Store credentials were never configured for this deployment
    #[error("store credentials not configured")]
    Credentials,

    /// The backend rejected or failed the write
    #[error("store backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A pipeline run failure, tagged with the stage that failed.
///
/// Every stage failure is terminal: the pipeline stops at the first error
/// and surfaces it unchanged. The two persistence stages are distinct
/// variants because the caller maps them to different user-visible messages.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Fetching the raw markup failed
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// Content extraction failed
    #[error("extraction failed: {0}")]
    Extract(#[from] ExtractError),

    /// Writing the summary record failed (full-text write was skipped)
    #[error("summary persistence failed: {0}")]
    PersistSummary(#[source] StoreError),

    /// Writing the full-text document failed (summary record already stored)
    #[error("full-text persistence failed: {0}")]
    PersistFullText(#[source] StoreError),
}

impl PipelineError {
    /// Stage tag for the step that failed.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Fetch(_) => "fetch",
            Self::Extract(_) => "extract",
            Self::PersistSummary(_) => "persist-summary",
            Self::PersistFullText(_) => "persist-fulltext",
        }
    }
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Result type alias for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Result type alias for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_tags() {
        let fetch = PipelineError::Fetch(FetchError::Status {
            status: 502,
            url: "https://example.com".to_string(),
        });
        assert_eq!(fetch.stage(), "fetch");

        let extract = PipelineError::Extract(ExtractError::NoContent);
        assert_eq!(extract.stage(), "extract");

        let summary = PipelineError::PersistSummary(StoreError::Credentials);
        assert_eq!(summary.stage(), "persist-summary");

        let full_text = PipelineError::PersistFullText(StoreError::Credentials);
        assert_eq!(full_text.stage(), "persist-fulltext");
    }
}
