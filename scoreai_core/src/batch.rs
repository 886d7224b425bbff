//! Sequential scoring of a list of input documents.

use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::DocumentSource;
use crate::error::Error;
use crate::processor::{DocumentProcessor, ProcessorConfig};
use crate::table::ResultTable;
use crate::warning::DataQualityWarning;

/// A document that contributed no records.
#[derive(Debug)]
pub struct SkippedDocument {
    pub name: String,
    pub error: Error,
}

#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Number of inputs handed to the runner.
    pub discovered: usize,
    /// Names of documents that produced records, in processing order.
    pub scored: Vec<String>,
    pub skipped: Vec<SkippedDocument>,
    /// Warnings per document, in processing order.
    pub warnings: Vec<(String, DataQualityWarning)>,
    pub table: ResultTable,
}

impl BatchSummary {
    /// Skipped documents that were read but are not shaped like a transcript.
    pub fn malformed(&self) -> impl Iterator<Item = &SkippedDocument> {
        self.skipped.iter().filter(|s| s.error.is_structural())
    }

    /// Skipped documents that could not be read at all.
    pub fn unreadable(&self) -> impl Iterator<Item = &SkippedDocument> {
        self.skipped.iter().filter(|s| !s.error.is_structural())
    }
}

pub struct BatchRunner<'a, S> {
    config: &'a ProcessorConfig,
    source: &'a S,
}

impl<'a, S: DocumentSource> BatchRunner<'a, S> {
    #[must_use]
    pub const fn new(config: &'a ProcessorConfig, source: &'a S) -> Self {
        Self { config, source }
    }

    /// Score every input in order.
    ///
    /// A document that fails to load or is structurally broken is skipped
    /// whole; documents before and after it are unaffected.
    pub fn run(&self, inputs: &[PathBuf]) -> BatchSummary {
        let mut summary = BatchSummary {
            discovered: inputs.len(),
            ..BatchSummary::default()
        };

        for path in inputs {
            let name = display_name(path);
            info!("Processing {name}");

            let outcome = self.source.load(path).and_then(|document| {
                DocumentProcessor::new(self.config, &name, &document).process()
            });

            match outcome {
                Ok(outcome) => {
                    info!(
                        "{name}: {} record(s) for participant {}",
                        outcome.records.len(),
                        outcome.participant_id
                    );
                    summary.table.append(outcome.records);
                    summary
                        .warnings
                        .extend(outcome.warnings.into_iter().map(|w| (name.clone(), w)));
                    summary.scored.push(name);
                }
                Err(error) => {
                    warn!("Skipping {name}: {error}");
                    summary.skipped.push(SkippedDocument { name, error });
                }
            }
        }

        summary
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}
