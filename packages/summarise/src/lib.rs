//! Blog Summarisation Pipeline
//!
//! Fetches a web page, extracts its main textual content, produces a short
//! extractive summary, transliterates the summary word-by-word into Urdu
//! using a static lookup table, and persists summary and full text to two
//! different stores.
//!
//! # Design
//!
//! The middle of the pipeline is pure: extraction, summarization, and
//! translation are plain functions over strings, deterministic and
//! side-effect free. Everything with I/O lives behind a trait seam so the
//! orchestrator can be exercised without a network or a database:
//!
//! - [`traits::PageFetcher`] fetches raw markup for a URL
//! - [`traits::SummaryStore`] persists structured summary records
//! - [`traits::DocumentStore`] persists full-text documents
//!
//! Each stage failure is terminal for the request. There are no retries and
//! no compensation between the two persistence writes.
//!
//! # Usage
//!
//! ```rust,ignore
//! use summarise::{HttpFetcher, MemoryStore, Pipeline, Translator};
//!
//! let store = std::sync::Arc::new(MemoryStore::new());
//! let pipeline = Pipeline::new(
//!     HttpFetcher::new(),
//!     store.clone(),
//!     store.clone(),
//!     Translator::builtin(),
//! );
//! let output = pipeline.run("https://example.com/post").await?;
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Collaborator seams (PageFetcher, SummaryStore, DocumentStore)
//! - [`types`] - Pipeline data types
//! - [`pipeline`] - The pure stages and the orchestrator
//! - [`fetchers`] - Fetcher implementations (HttpFetcher)
//! - [`stores`] - Store implementations (MemoryStore, SupabaseStore, MongoStore)
//! - [`testing`] - Mock implementations for testing

pub mod error;
pub mod fetchers;
pub mod pipeline;
pub mod stores;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{ExtractError, FetchError, PipelineError, StoreError};
pub use traits::{DocumentStore, PageFetcher, SummaryStore};
pub use types::{FullTextRecord, PipelineOutput, RawDocument, SummaryRecord};

// Re-export pipeline components
pub use pipeline::{
    extract, summarize, Pipeline, PipelineConfig, Translator, DEFAULT_MAX_SENTENCES,
    MIN_CONTENT_CHARS,
};

// Re-export fetchers
pub use fetchers::HttpFetcher;

// Re-export stores
pub use stores::{MemoryStore, MongoConfig, MongoStore, UnconfiguredStore};

#[cfg(feature = "postgres")]
pub use stores::SupabaseStore;
