//! Extraction pipeline: segmentation, per-document extraction and corpus aggregation.

mod aggregate;
mod dedup;
mod discover;
mod document;
mod options;
mod segmenter;
mod stats;

pub use aggregate::{Accumulator, CorpusAggregator, DocumentOutcome};
pub use dedup::{dedup_bullets, dedup_by_key, dedup_collation};
pub use discover::collect_docx_files;
pub use document::{file_name, DocumentExtraction, DocumentExtractor};
pub use options::ExtractOptions;
pub use segmenter::{Segmenter, Step};
pub use stats::CollateStats;
