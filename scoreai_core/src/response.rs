//! Locating the transcribed response that follows a memory marker.
//!
//! Between a marker and the narrative there are usually blank lines, prompt
//! labels and similar stubs. Those are skipped by length alone: the first
//! paragraph whose unstripped text is longer than the threshold is the
//! response.

use crate::error::{Error, Result};
use crate::paragraph::ParagraphIndex;

/// Default minimum length (in characters) of a response paragraph.
pub const DEFAULT_MIN_RESPONSE_LENGTH: usize = 25;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Paragraph index of the response.
    pub index: usize,
    /// Stripped response text.
    pub text: String,
}

#[derive(Debug, Clone, Copy)]
pub struct ResponseExtractor<'a> {
    index: &'a ParagraphIndex,
    min_length: usize,
}

impl<'a> ResponseExtractor<'a> {
    #[must_use]
    pub const fn new(index: &'a ParagraphIndex, min_length: usize) -> Self {
        Self { index, min_length }
    }

    /// First paragraph at or after `from` with raw length strictly above the threshold.
    pub fn first_substantial(&self, from: usize) -> Result<Response> {
        (from..self.index.count())
            .find(|&i| {
                self.index
                    .stat(i)
                    .is_some_and(|stat| stat.raw_len > self.min_length)
            })
            .map(|i| Response {
                index: i,
                text: self.index.text(i).to_string(),
            })
            .ok_or(Error::NoSubstantialResponse {
                from,
                min_length: self.min_length,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Document, Paragraph};

    fn index(paragraphs: Vec<Paragraph>) -> ParagraphIndex {
        ParagraphIndex::build(&Document {
            paragraphs,
            tables: Vec::new(),
        })
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn skips_stub_paragraphs() {
        let index = index(vec![
            Paragraph::new("Memory 1"),
            Paragraph::empty(),
            Paragraph::new("Participant:"),
            Paragraph::new("  I remember the first day at the lake house.  "),
        ]);

        let response = ResponseExtractor::new(&index, DEFAULT_MIN_RESPONSE_LENGTH)
            .first_substantial(1)
            .expect("response should be found");

        assert_eq!(response.index, 3);
        assert_eq!(response.text, "I remember the first day at the lake house.");
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn start_is_inclusive() {
        let index = index(vec![Paragraph::new("a response that is long enough!")]);
        let response = ResponseExtractor::new(&index, 25)
            .first_substantial(0)
            .expect("response should be found");
        assert_eq!(response.index, 0);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn threshold_is_strict_and_uses_raw_length() {
        // 25 characters exactly, then 20 characters padded to 26 with spaces.
        let index = index(vec![
            Paragraph::new("x".repeat(25)),
            Paragraph::new(format!("   {}   ", "y".repeat(20))),
        ]);

        let response = ResponseExtractor::new(&index, 25)
            .first_substantial(0)
            .expect("padded paragraph clears the threshold");

        assert_eq!(response.index, 1);
        assert!(index.stat(response.index).is_some_and(|s| s.raw_len > 25));
        assert_eq!(response.text, "y".repeat(20));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn missing_response_is_structural() {
        let index = index(vec![Paragraph::new("Memory 1"), Paragraph::new("short")]);
        let err = ResponseExtractor::new(&index, 25)
            .first_substantial(1)
            .expect_err("no paragraph clears the threshold");

        assert!(matches!(
            err,
            Error::NoSubstantialResponse {
                from: 1,
                min_length: 25
            }
        ));
        assert!(err.is_structural());
    }
}
