//! Persistence records and the pipeline's success output.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Row destined for the structured-record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRecord {
    /// Source page URL
    pub url: String,

    /// Extractive summary (may be empty)
    pub summary: String,

    /// Word-by-word Urdu rendition of the summary
    pub urdu_summary: String,
}

/// Document destined for the document store.
///
/// Wire field names follow the store's existing collection schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullTextRecord {
    /// Source page URL
    pub url: String,

    /// Full normalized page text
    #[serde(rename = "fullText")]
    pub full_text: String,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

/// Everything a successful pipeline run produces.
///
/// Running the pipeline twice on identical input yields identical output;
/// only the persistence side effects accumulate (duplicate records are
/// expected, not deduplicated).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOutput {
    /// Extractive summary (may be empty)
    pub summary: String,

    /// Translated summary
    pub urdu_summary: String,

    /// Full normalized page text
    pub full_text: String,
}
