//! Reader-neutral document model.
//!
//! Only the parts the scorer looks at are modelled: body paragraphs made of
//! runs, and tables made of rows of cells. Readers map their own object model
//! onto these types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,
    #[serde(default)]
    pub tables: Vec<Table>,
}

/// A body paragraph; its position in [`Document::paragraphs`] is its index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    #[serde(default)]
    pub runs: Vec<Run>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    #[serde(default)]
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    #[serde(default)]
    pub cells: Vec<TableCell>,
}

/// Cell text holds the cell's paragraphs joined with `\n`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCell {
    pub text: String,
}

impl Run {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Paragraph {
    /// Paragraph with a single run.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            runs: vec![Run::new(text)],
        }
    }

    /// Paragraph with no runs, as produced by blank lines.
    #[must_use]
    pub const fn empty() -> Self {
        Self { runs: Vec::new() }
    }

    #[must_use]
    pub fn from_runs<I, S>(runs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            runs: runs.into_iter().map(Run::new).collect(),
        }
    }

    /// Concatenated run text, unstripped.
    #[must_use]
    pub fn raw_text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}

impl TableCell {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Document {
    /// Text of the first cell of the first row of the first table.
    #[must_use]
    pub fn cover_cell(&self) -> Option<&str> {
        self.tables
            .first()?
            .rows
            .first()?
            .cells
            .first()
            .map(|cell| cell.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_text_keeps_whitespace() {
        let para = Paragraph::from_runs(["  Memory", " 1 "]);
        assert_eq!(para.raw_text(), "  Memory 1 ");
    }

    #[test]
    fn cover_cell_requires_table_row_and_cell() {
        let mut doc = Document::default();
        assert_eq!(doc.cover_cell(), None);

        doc.tables.push(Table::default());
        assert_eq!(doc.cover_cell(), None);

        doc.tables[0].rows.push(TableRow::default());
        assert_eq!(doc.cover_cell(), None);

        doc.tables[0].rows[0].cells.push(TableCell::new("Study\nParticipant ID: P9"));
        assert_eq!(doc.cover_cell(), Some("Study\nParticipant ID: P9"));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn deserializes_collaborator_contract() {
        let json = r#"{
            "paragraphs": [{ "runs": [{ "text": "Memory 1" }] }, {}],
            "tables": [{ "rows": [{ "cells": [{ "text": "x" }] }] }]
        }"#;
        let doc: Document = serde_json::from_str(json).expect("valid document JSON");
        assert_eq!(doc.paragraphs.len(), 2);
        assert!(doc.paragraphs[1].runs.is_empty());
        assert_eq!(doc.cover_cell(), Some("x"));
    }
}
