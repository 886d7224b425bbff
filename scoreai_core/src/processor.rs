//! Per-document scoring.
//!
//! A [`DocumentProcessor`] owns everything scoped to one document: the
//! paragraph index and the warnings raised so far. Stages run strictly
//! forward: indexing, participant ID, richness scan, boundary resolution,
//! section extraction. Any [`Error`] returned here aborts only this document.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, warn};

use crate::document::Document;
use crate::error::{Error, Result};
use crate::paragraph::ParagraphIndex;
use crate::response::{DEFAULT_MIN_RESPONSE_LENGTH, ResponseExtractor};
use crate::richness::{Richness, RichnessExtractor};
use crate::scan::MarkerScanner;
use crate::table::ScoringRecord;
use crate::tags::{TagCounter, TagCounts, TagVocabulary};
use crate::warning::DataQualityWarning;

/// Memory markers are this prefix followed by the 1-based ordinal.
pub const MEMORY_MARKER_PREFIX: &str = "Memory ";
/// Label in front of the participant ID on the cover table's second line.
pub const PARTICIPANT_ID_LABEL: &str = "Participant ID: ";
/// Appended after each paragraph when building a section's text blob.
pub const SECTION_SEPARATOR: char = '|';

pub const DEFAULT_MEMORY_COUNT: usize = 3;

/// What to do when a memory marker cannot be found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingMarkerPolicy {
    /// Skip the whole document.
    #[default]
    Abort,
    /// Keep the memories resolved before the missing marker.
    Truncate,
}

impl MissingMarkerPolicy {
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Abort => "abort",
            Self::Truncate => "truncate",
        }
    }
}

impl FromStr for MissingMarkerPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "truncate" => Ok(Self::Truncate),
            other => Err(format!(
                "unknown missing-marker policy {other:?} (expected abort or truncate)"
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessorConfig {
    /// Memories expected per document.
    #[serde(default = "ProcessorConfig::default_n_memories")]
    pub n_memories: usize,
    /// Paragraphs with raw length at or below this are skipped as stubs.
    #[serde(default = "ProcessorConfig::default_min_response_length")]
    pub min_response_length: usize,
    #[serde(default)]
    pub tags: TagVocabulary,
    #[serde(default)]
    pub on_missing_marker: MissingMarkerPolicy,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            n_memories: Self::default_n_memories(),
            min_response_length: Self::default_min_response_length(),
            tags: TagVocabulary::default(),
            on_missing_marker: MissingMarkerPolicy::default(),
        }
    }
}

impl ProcessorConfig {
    const fn default_n_memories() -> usize {
        DEFAULT_MEMORY_COUNT
    }

    const fn default_min_response_length() -> usize {
        DEFAULT_MIN_RESPONSE_LENGTH
    }

    pub fn validate(&self) -> Result<()> {
        if self.n_memories == 0 {
            return Err(Error::InvalidConfig(
                "n_memories must be at least 1".to_string(),
            ));
        }
        if self.min_response_length == 0 {
            return Err(Error::InvalidConfig(
                "min_response_length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Paragraph range `[start, end)` of one memory; `start` is the marker paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryRange {
    pub memory: usize,
    pub start: usize,
    pub end: usize,
}

/// Everything one document produced.
#[derive(Debug, Clone)]
pub struct DocumentOutcome {
    pub participant_id: String,
    pub memories: Vec<MemoryRange>,
    pub records: Vec<ScoringRecord>,
    pub warnings: Vec<DataQualityWarning>,
}

pub struct DocumentProcessor<'a> {
    config: &'a ProcessorConfig,
    name: &'a str,
    document: &'a Document,
    index: ParagraphIndex,
    warnings: Vec<DataQualityWarning>,
}

impl<'a> DocumentProcessor<'a> {
    /// Index the document. `name` only identifies it in logs.
    #[must_use]
    pub fn new(config: &'a ProcessorConfig, name: &'a str, document: &'a Document) -> Self {
        Self {
            config,
            name,
            document,
            index: ParagraphIndex::build(document),
            warnings: Vec::new(),
        }
    }

    pub fn process(mut self) -> Result<DocumentOutcome> {
        let participant_id = self.participant_id()?;
        debug!(
            "{}: participant {participant_id}, {} paragraphs",
            self.name,
            self.index.count()
        );

        let ratings = self.richness_ratings();
        let memories = self.resolve_boundaries()?;
        self.check_pairing(memories.len(), ratings.len());

        let config = self.config;
        let counter = TagCounter::new(&config.tags);
        let mut records = Vec::with_capacity(memories.len());
        for range in &memories {
            let tag_counts = self.score_section(range, &counter)?;
            records.push(ScoringRecord {
                participant_id: participant_id.clone(),
                memory: range.memory,
                tag_counts,
                episodic_richness: ratings
                    .get(range.memory - 1)
                    .copied()
                    .unwrap_or(Richness::Missing),
            });
        }

        Ok(DocumentOutcome {
            participant_id,
            memories,
            records,
            warnings: self.warnings,
        })
    }

    /// Second line of the cover cell, without its label.
    fn participant_id(&self) -> Result<String> {
        let table = self.document.tables.first().ok_or(Error::MissingCoverTable)?;
        let cell = table
            .rows
            .first()
            .and_then(|row| row.cells.first())
            .ok_or(Error::MissingCoverCell)?;

        let line = cell.text.split('\n').nth(1).ok_or(Error::MissingIdLine {
            lines: cell.text.split('\n').count(),
        })?;

        Ok(line.replace(PARTICIPANT_ID_LABEL, "").trim().to_string())
    }

    fn richness_ratings(&mut self) -> Vec<Richness> {
        let markers = RichnessExtractor.extract_all(&self.index);

        for marker in &markers {
            if marker.rating == Richness::Missing {
                self.warn(DataQualityWarning::ShortRichnessMarker {
                    paragraph: marker.paragraph,
                });
            }
        }

        let ratings: Vec<Richness> = markers.iter().map(|m| m.rating).collect();
        if ratings.len() != self.config.n_memories {
            self.warn(DataQualityWarning::RichnessCountMismatch {
                found: ratings.len(),
                expected: self.config.n_memories,
                codes: ratings.clone(),
            });
        }
        ratings
    }

    /// Resolve `Memory 1..=n` in order, each searched after the previous hit.
    fn resolve_boundaries(&mut self) -> Result<Vec<MemoryRange>> {
        let scanner = MarkerScanner::new(&self.index);
        let expected = self.config.n_memories;
        let mut starts = Vec::new();
        let mut previous = 0;

        for memory in 1..=expected {
            let marker = format!("{MEMORY_MARKER_PREFIX}{memory}");
            if let Some(found) = scanner.seek(previous, &marker) {
                debug!("{}: {marker} at paragraph {found}", self.name);
                starts.push(found);
                previous = found;
                continue;
            }

            match self.config.on_missing_marker {
                MissingMarkerPolicy::Abort => {
                    return Err(Error::MarkerNotFound {
                        marker,
                        from: previous,
                    });
                }
                MissingMarkerPolicy::Truncate => break,
            }
        }

        if starts.len() != expected {
            self.warn(DataQualityWarning::MemoryCountMismatch {
                found: starts.len(),
                expected,
            });
        }

        let ends = starts
            .iter()
            .skip(1)
            .copied()
            .chain(std::iter::once(self.index.count()));
        Ok(starts
            .iter()
            .zip(ends)
            .enumerate()
            .map(|(i, (&start, end))| MemoryRange {
                memory: i + 1,
                start,
                end,
            })
            .collect())
    }

    fn check_pairing(&mut self, memories: usize, codes: usize) {
        if memories != codes {
            self.warn(DataQualityWarning::PositionalPairing { memories, codes });
        }
    }

    /// Tag counts over every paragraph of the section, marker included.
    ///
    /// The section must still be followed by a substantial response somewhere
    /// in the document.
    fn score_section(&mut self, range: &MemoryRange, counter: &TagCounter<'_>) -> Result<TagCounts> {
        let response = ResponseExtractor::new(&self.index, self.config.min_response_length)
            .first_substantial(range.start + 1)?;
        debug!(
            "{}: memory {} response at paragraph {}: {}",
            self.name, range.memory, response.index, response.text
        );

        if response.index >= range.end {
            self.warn(DataQualityWarning::ResponseOutsideSection {
                memory: range.memory,
                response: response.index,
                end: range.end,
            });
        }

        let mut blob = String::new();
        for text in self.index.texts(range.start, range.end) {
            blob.push_str(text);
            blob.push(SECTION_SEPARATOR);
        }
        Ok(counter.count(&blob))
    }

    fn warn(&mut self, warning: DataQualityWarning) {
        warn!("In {}: {warning}", self.name);
        self.warnings.push(warning);
    }
}
