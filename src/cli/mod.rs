//! Command-line interface for strain-solver.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **classify**: Classify a label against the strain catalog
//! - **score**: Compare two labels directly with the similarity scorer
//! - **catalog**: List, show, or export strains from the catalog
//!
//! ## Usage
//!
//! ```text
//! # Classify a label against the embedded catalog
//! strain-solver classify "Mr. Grim"
//!
//! # Tune the matching thresholds
//! strain-solver classify "chemdaug" --confidence-threshold 0.8 --max-length-diff 0.2
//!
//! # JSON output for scripting
//! strain-solver classify ak47 --format json
//!
//! # Compare two labels directly
//! strain-solver score "Mrs. Grim" "Mr. Grimm"
//!
//! # Inspect the catalog
//! strain-solver catalog list --tag sativa
//! ```

use clap::{Parser, Subcommand};

pub mod catalog;
pub mod classify;
pub mod score;

#[derive(Parser)]
#[command(name = "strain-solver")]
#[command(version)]
#[command(about = "Classify strain name labels against a catalog of known strains and aliases")]
#[command(
    long_about = "strain-solver decides what an unknown strain label is.\n\nIt checks the label against a catalog of canonical strain names and a table of known aliases, then falls back to fuzzy matching (normalized Levenshtein similarity) to decide between:\n- an existing strain\n- a known alias\n- a probable new alias of one strain\n- an ambiguous tie needing human review\n- a genuinely new strain"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify a label against the strain catalog
    Classify(classify::ClassifyArgs),

    /// Compare two labels directly using the similarity scorer
    Score(score::ScoreArgs),

    /// Manage the strain catalog
    Catalog(catalog::CatalogArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
