//! Episodic-richness markers.
//!
//! A marker is any paragraph whose stripped text starts with `[ER`. The rating
//! is the single character at offset 4, after the one-character delimiter
//! that transcribers write as a hyphen, en dash or space (`[ER-4]`, `[ER 4]`).

use std::fmt;

use crate::paragraph::ParagraphIndex;

pub const RICHNESS_PREFIX: &str = "[ER";
const RATING_OFFSET: usize = 4;

/// A single-character richness rating, or `missing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Richness {
    Code(char),
    Missing,
}

impl fmt::Display for Richness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code(c) => write!(f, "{c}"),
            Self::Missing => f.write_str("missing"),
        }
    }
}

/// One marker paragraph and the rating read from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RichnessMarker {
    pub paragraph: usize,
    pub rating: Richness,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RichnessExtractor;

impl RichnessExtractor {
    /// All markers in document order. Nothing is dropped or padded.
    ///
    /// A marker too short to hold a rating is kept with [`Richness::Missing`].
    #[must_use]
    pub fn extract_all(&self, index: &ParagraphIndex) -> Vec<RichnessMarker> {
        (0..index.count())
            .filter_map(|paragraph| {
                let text = index.text(paragraph);
                text.starts_with(RICHNESS_PREFIX).then(|| RichnessMarker {
                    paragraph,
                    rating: text
                        .chars()
                        .nth(RATING_OFFSET)
                        .map_or(Richness::Missing, Richness::Code),
                })
            })
            .collect()
    }
}
