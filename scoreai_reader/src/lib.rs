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

//! `.docx` input for the scorer.
//!
//! Maps the Word object model onto [`scoreai_core::Document`]: body-level
//! paragraphs with their direct runs, and body-level tables with each cell's
//! paragraph texts joined by newlines.

mod docx;
mod input;

pub use docx::{DocxReader, parse_docx};
pub use input::{DOCX_EXTENSION, list_documents};
