//! Folio CLI - Command-line interface for note import/export

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import a markdown file into a note document
    Import {
        /// Input markdown file path
        input: String,

        /// Output note JSON file path
        #[arg(short, long)]
        output: String,
    },

    /// Export a note document to markdown
    Export {
        /// Input note JSON file path
        input: String,

        /// Output markdown file path
        #[arg(short, long)]
        output: String,
    },

    /// Display information about a note document
    Info {
        /// Input note JSON file path
        input: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate the blocks of a note document
    Validate {
        /// Input note JSON file path
        input: String,

        /// Fail when any block is structurally invalid
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "folio_cli=debug,folio_core=trace"
    } else {
        "folio_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Import { input, output } => commands::import(&input, &output),

        Commands::Export { input, output } => commands::export(&input, &output),

        Commands::Info { input, json } => commands::info(&input, json),

        Commands::Validate { input, strict } => commands::validate(&input, strict),
    }
}
