use std::path::Path;

use docx_rs::{DocumentChild, ParagraphChild, RunChild, TableCellContent, TableChild, TableRowChild};
use scoreai_core::{
    Document, DocumentSource, Error, Paragraph, Result, Run, Table, TableCell, TableRow,
};
use tracing::{debug, warn};

/// Reads `.docx` files from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxReader;

impl DocumentSource for DocxReader {
    fn load(&self, path: &Path) -> Result<Document> {
        let bytes = std::fs::read(path)?;
        parse_docx(&bytes)
    }
}

/// Parse DOCX bytes into the scorer's document model.
pub fn parse_docx(bytes: &[u8]) -> Result<Document> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| {
        warn!("DOCX parsing failed: {e}");
        Error::Read(format!("invalid DOCX: {e}"))
    })?;

    let mut document = Document::default();
    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(paragraph) => {
                document.paragraphs.push(convert_paragraph(paragraph));
            }
            DocumentChild::Table(table) => document.tables.push(convert_table(table)),
            _ => {}
        }
    }

    debug!(
        "Parsed DOCX: {} paragraphs, {} tables",
        document.paragraphs.len(),
        document.tables.len()
    );
    Ok(document)
}

/// Direct runs only; hyperlinks, insertions and the like are not runs.
fn convert_paragraph(paragraph: &docx_rs::Paragraph) -> Paragraph {
    Paragraph {
        runs: paragraph
            .children
            .iter()
            .filter_map(|child| match child {
                ParagraphChild::Run(run) => Some(Run::new(run_text(run))),
                _ => None,
            })
            .collect(),
    }
}

fn run_text(run: &docx_rs::Run) -> String {
    run.children
        .iter()
        .filter_map(|child| match child {
            RunChild::Text(text) => Some(text.text.as_str()),
            RunChild::Tab(_) => Some("\t"),
            RunChild::Break(_) => Some("\n"),
            _ => None,
        })
        .collect()
}

#[expect(
    unreachable_patterns,
    reason = "docx-rs table row and cell enums have a single variant"
)]
fn convert_table(table: &docx_rs::Table) -> Table {
    Table {
        rows: table
            .rows
            .iter()
            .filter_map(|child| match child {
                TableChild::TableRow(row) => Some(TableRow {
                    cells: row
                        .cells
                        .iter()
                        .filter_map(|cell| match cell {
                            TableRowChild::TableCell(cell) => Some(TableCell::new(cell_text(cell))),
                            _ => None,
                        })
                        .collect(),
                }),
                _ => None,
            })
            .collect(),
    }
}

/// The cell's own paragraphs, one per line. Nested tables are ignored.
fn cell_text(cell: &docx_rs::TableCell) -> String {
    cell.children
        .iter()
        .filter_map(|content| match content {
            TableCellContent::Paragraph(paragraph) => Some(convert_paragraph(paragraph).raw_text()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_bytes_are_a_read_error() {
        let result = parse_docx(b"This is not a DOCX file");
        assert!(matches!(result, Err(Error::Read(_))));
    }

    #[test]
    fn empty_bytes_are_a_read_error() {
        assert!(parse_docx(&[]).is_err());
    }

    #[test]
    fn run_text_keeps_tabs_and_breaks() {
        let run = docx_rs::Run::new()
            .add_text("Memory")
            .add_tab()
            .add_text("1")
            .add_break(docx_rs::BreakType::TextWrapping);
        assert_eq!(run_text(&run), "Memory\t1\n");
    }

    #[test]
    fn cell_paragraphs_are_joined_by_newlines() {
        let cell = docx_rs::TableCell::new()
            .add_paragraph(docx_rs::Paragraph::new().add_run(docx_rs::Run::new().add_text("Study")))
            .add_paragraph(
                docx_rs::Paragraph::new()
                    .add_run(docx_rs::Run::new().add_text("Participant "))
                    .add_run(docx_rs::Run::new().add_text("ID: P7")),
            );
        assert_eq!(cell_text(&cell), "Study\nParticipant ID: P7");
    }
}
