//! Clue requirement client binary.
//!
//! Loads the requirement registry (embedded content, or a data directory
//! given by `CONTENT_DATA_DIR` / `--data-dir`) and answers questions about it.
//!
//! # Examples
//!
//! ```bash
//! # List every group
//! cargo run -p clue-client -- groups
//!
//! # Which groups and clue steps do these items satisfy?
//! cargo run -p clue-client -- check --items 11920,2347
//!
//! # Fail on any stale exclusion or empty group
//! cargo run -p clue-client -- --validation deny validate
//! ```
mod commands;
mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clue_core::ValidationLevel;

use commands::Content;
use config::ClientConfig;

#[derive(Parser, Debug)]
#[command(name = "clue", about = "Inspect clue scroll item requirement groups")]
struct Cli {
    /// Content data directory (overrides CONTENT_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Validation level for every finding: ignore, warn or deny
    #[arg(long, global = true)]
    validation: Option<ValidationLevel>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every requirement group
    Groups,
    /// Show the item ids of one group
    Show {
        /// Group key, e.g. ANY_PICKAXE
        key: String,
    },
    /// Check which groups and clue steps a set of items satisfies
    Check {
        /// Comma-separated item ids
        #[arg(long, value_delimiter = ',')]
        items: Vec<u32>,
    },
    /// Report stale exclusions, empty groups and duplicate keys
    Validate,
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ClientConfig::from_env().with_overrides(cli.data_dir, cli.validation);

    match cli.command {
        Command::Groups => commands::groups(&Content::load(&config)?, cli.json),
        Command::Show { key } => commands::show(&Content::load(&config)?, &key, cli.json),
        Command::Check { items } => commands::check(&Content::load(&config)?, &items, cli.json),
        Command::Validate => commands::validate(&config),
    }
}
