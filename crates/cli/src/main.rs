//! ragnar CLI — the main entry point.
//!
//! Commands:
//! - `ingest` — Build the semantic index from a data directory
//! - `ask`    — Run one question through the pipeline
//! - `eval`   — Score the pipeline against a question/answer dataset

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "ragnar",
    about = "ragnar — agentic RAG over your documents",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the semantic index from the data directory
    Ingest {
        /// Override the data directory to ingest
        #[arg(short, long)]
        data_dir: Option<PathBuf>,

        /// Override where the index is written
        #[arg(long)]
        index: Option<PathBuf>,
    },

    /// Ask the agent a question
    Ask {
        /// The question (defaults to an example query)
        question: Option<String>,
    },

    /// Evaluate the pipeline over a question/ground-truth dataset
    Eval {
        /// Override the dataset path
        #[arg(long)]
        dataset: Option<PathBuf>,

        /// Override where results are written
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Ingest { data_dir, index } => commands::ingest::run(data_dir, index).await?,
        Commands::Ask { question } => commands::ask::run(question).await?,
        Commands::Eval { dataset, out } => commands::eval::run(dataset, out).await?,
    }

    Ok(())
}
