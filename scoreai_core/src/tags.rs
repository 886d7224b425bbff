//! Scoring-code vocabulary and per-section tag counting.
//!
//! Tags are matched as plain substrings, so `Int_EVENT` still counts as one
//! `Int_EV`. Occurrences do not overlap.

use serde::{Deserialize, Serialize};

/// Number of scoring codes in the vocabulary.
pub const TAG_COUNT: usize = 9;

/// Internal/external detail codes, in output column order.
pub const DEFAULT_TAGS: [&str; TAG_COUNT] = [
    "Int_EV", "Int_PERC", "Int_EMO", "Int_PL", "Int_TM", "Ext_EV", "Ext_SEM", "Ext_REP", "Ext_OTH",
];

/// Ordered, fixed-size list of tag strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct TagVocabulary([String; TAG_COUNT]);

impl Default for TagVocabulary {
    fn default() -> Self {
        Self(DEFAULT_TAGS.map(str::to_string))
    }
}

impl TryFrom<Vec<String>> for TagVocabulary {
    type Error = String;

    fn try_from(tags: Vec<String>) -> Result<Self, Self::Error> {
        if let Some(pos) = tags.iter().position(String::is_empty) {
            return Err(format!("tag {} is empty", pos + 1));
        }
        for (i, tag) in tags.iter().enumerate() {
            if tags[..i].contains(tag) {
                return Err(format!("tag {tag:?} is listed more than once"));
            }
        }
        let found = tags.len();
        let tags: [String; TAG_COUNT] = tags
            .try_into()
            .map_err(|_| format!("expected {TAG_COUNT} tags, found {found}"))?;
        Ok(Self(tags))
    }
}

impl From<TagVocabulary> for Vec<String> {
    fn from(vocabulary: TagVocabulary) -> Self {
        vocabulary.0.into()
    }
}

impl TagVocabulary {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Counts per tag, aligned with the vocabulary order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TagCounts([usize; TAG_COUNT]);

impl TagCounts {
    #[must_use]
    pub const fn new(counts: [usize; TAG_COUNT]) -> Self {
        Self(counts)
    }

    #[must_use]
    pub const fn as_array(&self) -> &[usize; TAG_COUNT] {
        &self.0
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<usize> {
        self.0.get(position).copied()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// `(tag, count)` pairs in vocabulary order.
    pub fn named<'a>(
        &'a self,
        vocabulary: &'a TagVocabulary,
    ) -> impl Iterator<Item = (&'a str, usize)> {
        vocabulary.iter().zip(self.0.iter().copied())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TagCounter<'a> {
    vocabulary: &'a TagVocabulary,
}

impl<'a> TagCounter<'a> {
    #[must_use]
    pub const fn new(vocabulary: &'a TagVocabulary) -> Self {
        Self { vocabulary }
    }

    #[must_use]
    pub fn count(&self, text: &str) -> TagCounts {
        TagCounts(
            self.vocabulary
                .0
                .each_ref()
                .map(|tag| text.matches(tag.as_str()).count()),
        )
    }
}
