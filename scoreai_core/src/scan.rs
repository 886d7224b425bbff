//! Forward-only search for exact marker paragraphs.

use crate::paragraph::ParagraphIndex;

#[derive(Debug, Clone, Copy)]
pub struct MarkerScanner<'a> {
    index: &'a ParagraphIndex,
}

impl<'a> MarkerScanner<'a> {
    #[must_use]
    pub const fn new(index: &'a ParagraphIndex) -> Self {
        Self { index }
    }

    /// First paragraph after `from` whose stripped text equals `marker`.
    ///
    /// Returns `None` when the document ends first. Callers resume from the
    /// previous hit, so resolving every marker of a document stays linear.
    #[must_use]
    pub fn seek(&self, from: usize, marker: &str) -> Option<usize> {
        let start = from.checked_add(1)?;
        (start..self.index.count()).find(|&i| self.index.text(i) == marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Document, Paragraph};

    fn index(texts: &[&str]) -> ParagraphIndex {
        ParagraphIndex::build(&Document {
            paragraphs: texts.iter().map(|t| Paragraph::new(*t)).collect(),
            tables: Vec::new(),
        })
    }

    #[test]
    fn finds_exact_match_after_start() {
        let index = index(&["Memory 1", "intro", " Memory 1 ", "Memory 2"]);
        let scanner = MarkerScanner::new(&index);

        assert_eq!(scanner.seek(0, "Memory 1"), Some(2));
        assert_eq!(scanner.seek(2, "Memory 2"), Some(3));
    }

    #[test]
    fn never_returns_start_or_earlier() {
        let index = index(&["Memory 1", "Memory 1", "x", "Memory 1"]);
        let scanner = MarkerScanner::new(&index);

        for from in 0..index.count() {
            if let Some(found) = scanner.seek(from, "Memory 1") {
                assert!(found > from);
            }
        }
    }

    #[test]
    fn prefix_is_not_a_match() {
        let index = index(&["", "Memory 10", "Memory 1 (cont.)"]);
        assert_eq!(MarkerScanner::new(&index).seek(0, "Memory 1"), None);
    }

    #[test]
    fn last_paragraph_is_checked() {
        let index = index(&["", "x", "Memory 3"]);
        assert_eq!(MarkerScanner::new(&index).seek(0, "Memory 3"), Some(2));
    }

    #[test]
    fn start_past_end_is_not_found() {
        let index = index(&["Memory 1"]);
        let scanner = MarkerScanner::new(&index);
        assert_eq!(scanner.seek(5, "Memory 1"), None);
        assert_eq!(scanner.seek(usize::MAX, "Memory 1"), None);
    }
}
