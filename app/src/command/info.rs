use std::path::PathBuf;

use scoreai_config::Config;
use scoreai_reader::list_documents;

/// Input parameters for the Info command strategy.
#[derive(Debug, Clone, Default)]
pub struct InfoInput {
    /// Explicit config file
    pub config: Option<PathBuf>,
}

/// Strategy for displaying configuration information.
///
/// This strategy outputs the effective configuration:
/// - Where it was loaded from
/// - Input and output folders, and how many transcripts the input holds
/// - Scoring options and the tag vocabulary in column order
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = InfoInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let source = match &input.config {
            Some(path) => path.display().to_string(),
            None => {
                let path = Config::default_path()?;
                if path.exists() {
                    path.display().to_string()
                } else {
                    "(built-in defaults)".to_string()
                }
            }
        };
        let config = super::load_config(input.config.as_deref())?;

        println!("=== scoreai Configuration ===\n");
        println!("Source: {source}");
        println!();

        println!("Paths:");
        println!("  Input:  {}", config.paths.input_dir.display());
        match list_documents(&config.paths.input_dir) {
            Ok(documents) => println!("  Transcripts found: {}", documents.len()),
            Err(e) => println!("  Transcripts found: (cannot read folder: {e})"),
        }
        println!("  Output: {}", config.paths.output_dir.display());
        println!();

        println!("Scoring:");
        println!("  Memories per transcript: {}", config.scoring.n_memories);
        println!(
            "  Min response length: {}",
            config.scoring.min_response_length
        );
        println!(
            "  On missing marker: {}",
            config.scoring.on_missing_marker.as_str()
        );
        println!(
            "  Tags: {}",
            config.scoring.tags.iter().collect::<Vec<_>>().join(", ")
        );

        Ok(())
    }
}
