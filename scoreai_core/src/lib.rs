#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use std::path::Path;

pub mod batch;
pub mod document;
mod error;
pub mod paragraph;
pub mod processor;
pub mod response;
pub mod richness;
pub mod scan;
pub mod table;
pub mod tags;
mod warning;

pub use batch::{BatchRunner, BatchSummary, SkippedDocument};
pub use document::{Document, Paragraph, Run, Table, TableCell, TableRow};
pub use error::{Error, Result};
pub use paragraph::{ParagraphIndex, ParagraphStat};
pub use processor::{
    DocumentOutcome, DocumentProcessor, MemoryRange, MissingMarkerPolicy, ProcessorConfig,
};
pub use response::{DEFAULT_MIN_RESPONSE_LENGTH, Response, ResponseExtractor};
pub use richness::{Richness, RichnessExtractor, RichnessMarker};
pub use scan::MarkerScanner;
pub use table::{ResultTable, ScoringRecord, output_file_name};
pub use tags::{DEFAULT_TAGS, TAG_COUNT, TagCounter, TagCounts, TagVocabulary};
pub use warning::DataQualityWarning;

/// Anything that can turn an input path into a [`Document`].
///
/// The `.docx` reader lives in its own crate; tests plug in in-memory sources.
pub trait DocumentSource {
    fn load(&self, path: &Path) -> Result<Document>;
}
