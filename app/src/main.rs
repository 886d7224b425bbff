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

use clap::{Parser, Subcommand};
use scoreai_core::MissingMarkerPolicy;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod command;

use command::{
    CommandStrategy, InfoInput, InfoStrategy, InitStrategy, RunInput, RunStrategy,
    VersionStrategy,
};

#[derive(Parser)]
#[command(name = "scoreai")]
#[command(about = "Score transcribed autobiographical memory narratives", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score every transcript in the input folder
    Run {
        /// Config file (defaults to ~/scoreai/config.json)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Folder of .docx transcripts
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Folder to write the scoring table to
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Memories expected per transcript
        #[arg(short = 'n', long)]
        memories: Option<usize>,

        /// abort (skip the document) or truncate (keep memories found)
        #[arg(long)]
        on_missing_marker: Option<MissingMarkerPolicy>,
    },
    /// Initialize configuration
    Init,
    /// Show effective configuration
    Info {
        /// Config file (defaults to ~/scoreai/config.json)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            input,
            output,
            memories,
            on_missing_marker,
        } => RunStrategy.execute(RunInput {
            config,
            input_dir: input,
            output_dir: output,
            n_memories: memories,
            on_missing_marker,
        }),
        Commands::Init => InitStrategy.execute(()),
        Commands::Info { config } => InfoStrategy.execute(InfoInput { config }),
        Commands::Version => VersionStrategy.execute(()),
    }
}
