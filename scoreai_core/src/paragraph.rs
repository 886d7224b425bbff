//! Per-paragraph statistics and stripped text, built once per document.

use crate::document::Document;

/// Run count and unstripped text length (in characters) of one paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParagraphStat {
    pub run_count: usize,
    pub raw_len: usize,
}

/// Read-only view over a document's paragraphs.
///
/// Every component that reasons about paragraph positions goes through the
/// same index, so boundaries, responses and richness markers agree on
/// numbering.
#[derive(Debug, Clone)]
pub struct ParagraphIndex {
    stats: Vec<ParagraphStat>,
    texts: Vec<String>,
}

impl ParagraphIndex {
    #[must_use]
    pub fn build(document: &Document) -> Self {
        let mut stats = Vec::with_capacity(document.paragraphs.len());
        let mut texts = Vec::with_capacity(document.paragraphs.len());

        for paragraph in &document.paragraphs {
            let raw = paragraph.raw_text();
            stats.push(ParagraphStat {
                run_count: paragraph.runs.len(),
                raw_len: raw.chars().count(),
            });
            texts.push(raw.trim().to_string());
        }

        Self { stats, texts }
    }

    /// Number of paragraphs in the document.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.stats.len()
    }

    /// Stripped text of paragraph `i`; empty when out of range or without runs.
    #[must_use]
    pub fn text(&self, i: usize) -> &str {
        self.texts.get(i).map_or("", String::as_str)
    }

    #[must_use]
    pub fn stat(&self, i: usize) -> Option<ParagraphStat> {
        self.stats.get(i).copied()
    }

    /// Stripped texts of paragraphs in `start..end`, in order.
    pub fn texts(&self, start: usize, end: usize) -> impl Iterator<Item = &str> {
        let end = end.min(self.texts.len());
        let start = start.min(end);
        self.texts[start..end].iter().map(String::as_str)
    }
}
