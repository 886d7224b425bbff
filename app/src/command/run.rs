use anyhow::Context;
use chrono::Local;
use scoreai_core::{
    BatchRunner, BatchSummary, MissingMarkerPolicy, SkippedDocument, output_file_name,
};
use scoreai_reader::{DocxReader, list_documents};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Input parameters for the Run command strategy.
///
/// Every `Some` field overrides the matching config value.
#[derive(Debug, Clone, Default)]
pub struct RunInput {
    /// Explicit config file
    pub config: Option<PathBuf>,
    /// Folder of `.docx` transcripts
    pub input_dir: Option<PathBuf>,
    /// Folder the scoring table is written to
    pub output_dir: Option<PathBuf>,
    /// Memories expected per transcript
    pub n_memories: Option<usize>,
    pub on_missing_marker: Option<MissingMarkerPolicy>,
}

/// Strategy for scoring a folder of transcripts.
///
/// This strategy handles the whole batch:
/// - Loading configuration and applying CLI overrides
/// - Listing `.docx` transcripts in the input folder
/// - Scoring each transcript in name order, skipping broken ones
/// - Writing `scoring_<date>_n<docs>.csv` to the output folder
#[derive(Debug, Clone, Copy)]
pub struct RunStrategy;

impl super::CommandStrategy for RunStrategy {
    type Input = RunInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let mut config = super::load_config(input.config.as_deref())?;
        if let Some(dir) = input.input_dir {
            config.paths.input_dir = dir;
        }
        if let Some(dir) = input.output_dir {
            config.paths.output_dir = dir;
        }
        if let Some(n) = input.n_memories {
            config.scoring.n_memories = n;
        }
        if let Some(policy) = input.on_missing_marker {
            config.scoring.on_missing_marker = policy;
        }
        config.validate()?;

        let input_dir = &config.paths.input_dir;
        let inputs = list_documents(input_dir)
            .with_context(|| format!("Failed to list {}", input_dir.display()))?;
        if inputs.is_empty() {
            warn!("No .docx files found in {}", input_dir.display());
        }
        info!(
            "Scoring {} document(s) from {}, expecting {} memories each",
            inputs.len(),
            input_dir.display(),
            config.scoring.n_memories
        );

        let summary = BatchRunner::new(&config.scoring, &DocxReader).run(&inputs);

        let output_path = write_table(&summary, &config.paths.output_dir, &config.scoring.tags)?;
        print_summary(&summary, &output_path);
        Ok(())
    }
}

fn write_table(
    summary: &BatchSummary,
    output_dir: &Path,
    tags: &scoreai_core::TagVocabulary,
) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    let file_name = output_file_name(Local::now().date_naive(), summary.discovered);
    let output_path = output_dir.join(file_name);
    let file = File::create(&output_path)
        .with_context(|| format!("Failed to create {}", output_path.display()))?;
    summary.table.write_csv(BufWriter::new(file), tags)?;

    info!(
        "Wrote {} record(s) to {}",
        summary.table.len(),
        output_path.display()
    );
    Ok(output_path)
}

fn print_skipped<'a>(title: &str, skipped: impl Iterator<Item = &'a SkippedDocument>) {
    let mut skipped = skipped.peekable();
    if skipped.peek().is_none() {
        return;
    }
    println!("\n{title}");
    for document in skipped {
        println!("  {}: {}", document.name, document.error);
    }
}

fn print_summary(summary: &BatchSummary, output_path: &Path) {
    println!("=== scoreai ===\n");
    println!("Documents found:   {}", summary.discovered);
    println!("Documents scored:  {}", summary.scored.len());
    println!("Documents skipped: {}", summary.skipped.len());
    println!("Records written:   {}", summary.table.len());
    println!("Output:            {}", output_path.display());

    print_skipped("Skipped (malformed transcript):", summary.malformed());
    print_skipped("Skipped (unreadable file):", summary.unreadable());

    if !summary.warnings.is_empty() {
        println!("\nWarnings:");
        for (name, warning) in &summary.warnings {
            println!("  {name}: {warning}");
        }
    }
}
