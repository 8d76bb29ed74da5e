//! Pipeline orchestration around the pure stages.

use chrono::Utc;
use tracing::{debug, info};

use crate::error::{PipelineError, Result};
use crate::pipeline::{extract, summarize, Translator, DEFAULT_MAX_SENTENCES};
use crate::traits::{DocumentStore, PageFetcher, SummaryStore};
use crate::types::{FullTextRecord, PipelineOutput, SummaryRecord};

/// Tunables for a pipeline instance.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// How many leading sentences the summary keeps
    pub max_sentences: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_sentences: DEFAULT_MAX_SENTENCES,
        }
    }
}

/// The end-to-end summarise pipeline.
///
/// Sequences fetch → extract → summarize → translate → persist, failing
/// fast at the first stage error. The pure stages in the middle cannot
/// fail; the orchestrator owns the contract with the external collaborators
/// around them. One `run` handles one request end to end; concurrent runs
/// share nothing but the read-only translation table.
///
/// # Example
///
/// ```rust,ignore
/// use summarise::{HttpFetcher, Pipeline, Translator};
///
/// let pipeline = Pipeline::new(fetcher, summary_store, document_store, Translator::builtin());
/// let output = pipeline.run("https://example.com/post").await?;
/// println!("{}", output.urdu_summary);
/// ```
pub struct Pipeline<F, S, D> {
    fetcher: F,
    summary_store: S,
    document_store: D,
    translator: Translator,
    config: PipelineConfig,
}

impl<F: PageFetcher, S: SummaryStore, D: DocumentStore> Pipeline<F, S, D> {
    /// Create a pipeline with default configuration.
    pub fn new(fetcher: F, summary_store: S, document_store: D, translator: Translator) -> Self {
        Self {
            fetcher,
            summary_store,
            document_store,
            translator,
            config: PipelineConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the pipeline for one URL.
    ///
    /// Stage order and failure policy:
    /// 1. fetch raw markup — any error is terminal, no retry
    /// 2. extract main content — too little content is terminal
    /// 3. summarize — pure; an empty summary is valid and flows through
    /// 4. translate — pure
    /// 5. persist the summary record — on error the full-text write is skipped
    /// 6. persist the full text — on error the summary stays stored; the
    ///    partial state is accepted, never rolled back
    pub async fn run(&self, url: &str) -> Result<PipelineOutput> {
        debug!(url = %url, "pipeline starting");

        let document = self
            .fetcher
            .fetch(url)
            .await
            .map_err(PipelineError::Fetch)?;

        let full_text = extract(&document.html)?;
        debug!(url = %url, chars = full_text.chars().count(), "content extracted");

        let summary = summarize(&full_text, self.config.max_sentences);
        let urdu_summary = self.translator.translate(&summary);

        let record = SummaryRecord {
            url: document.url.clone(),
            summary: summary.clone(),
            urdu_summary: urdu_summary.clone(),
        };
        self.summary_store
            .insert_summary(&record)
            .await
            .map_err(PipelineError::PersistSummary)?;

        let full_text_record = FullTextRecord {
            url: document.url.clone(),
            full_text: full_text.clone(),
            created_at: Utc::now(),
        };
        self.document_store
            .insert_full_text(&full_text_record)
            .await
            .map_err(PipelineError::PersistFullText)?;

        info!(
            url = %url,
            summary_chars = summary.chars().count(),
            full_text_chars = full_text.chars().count(),
            "pipeline complete"
        );

        Ok(PipelineOutput {
            summary,
            urdu_summary,
            full_text,
        })
    }
}
