//! Pipeline data types.

pub mod document;
pub mod record;

pub use document::RawDocument;
pub use record::{FullTextRecord, PipelineOutput, SummaryRecord};
