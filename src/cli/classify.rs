use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::catalog::store::StrainCatalog;
use crate::cli::OutputFormat;
use crate::core::types::{Confidence, Outcome};
use crate::matching::engine::{
    classify_label, MatchingConfig, DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_MAX_LENGTH_DIFF,
};
use crate::matching::normalize::clean;

#[derive(Args)]
pub struct ClassifyArgs {
    /// Label to classify
    #[arg(required = true)]
    pub label: String,

    /// Minimum similarity ratio (0-1) for a catalog name to count as a
    /// fuzzy candidate
    #[arg(long, default_value_t = DEFAULT_CONFIDENCE_THRESHOLD)]
    pub confidence_threshold: f64,

    /// Maximum relative length difference (0-1) between the label and a
    /// candidate name
    #[arg(long, default_value_t = DEFAULT_MAX_LENGTH_DIFF)]
    pub max_length_diff: f64,

    /// Path to custom catalog file
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

/// Serializable classification report for --format json
#[derive(Serialize)]
struct ClassifyReport<'a> {
    label: &'a str,
    normalized: String,
    #[serde(flatten)]
    outcome: &'a Outcome,
}

/// Execute classify subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded, the thresholds are out
/// of range, or the label is empty after normalization.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ClassifyArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = if let Some(path) = &args.catalog {
        StrainCatalog::load_from_file(path)?
    } else {
        StrainCatalog::load_embedded()?
    };

    if verbose {
        eprintln!(
            "Loaded catalog with {} strains and {} aliases",
            catalog.len(),
            catalog.alias_count()
        );
    }

    if catalog.is_empty() {
        eprintln!("Warning: catalog is empty; every label will classify as a new strain.");
    }

    let config = MatchingConfig {
        confidence_threshold: args.confidence_threshold,
        max_length_diff: args.max_length_diff,
    };

    let outcome = classify_label(&args.label, &catalog, config)?;

    match format {
        OutputFormat::Text => print_text_outcome(&args.label, &outcome),
        OutputFormat::Json => print_json_outcome(&args.label, &outcome)?,
        OutputFormat::Tsv => print_tsv_outcome(&args.label, &outcome),
    }

    Ok(())
}

fn print_text_outcome(label: &str, outcome: &Outcome) {
    match outcome {
        Outcome::ExistingStrain => {
            println!("'{label}' is a strain that already exists in the catalog");
        }
        Outcome::KnownAlias { canonical } => {
            println!("'{label}' is a known alias for '{canonical}'");
        }
        Outcome::NewAlias { canonical, score } => {
            println!(
                "'{label}' looks like a new alias for '{canonical}' ({:.1}% similar, {} confidence)",
                score * 100.0,
                Confidence::from_score(*score)
            );
        }
        Outcome::AmbiguousMatches { score, candidates } => {
            println!(
                "'{label}' is ambiguous; these tie at {:.1}% similarity:",
                score * 100.0
            );
            for candidate in candidates {
                println!("  - {candidate}");
            }
        }
        Outcome::NewStrain => {
            println!("'{label}' not found in strains or aliases; it looks like a new strain");
        }
    }
}

fn print_json_outcome(label: &str, outcome: &Outcome) -> anyhow::Result<()> {
    let report = ClassifyReport {
        label,
        normalized: clean(label),
        outcome,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn print_tsv_outcome(label: &str, outcome: &Outcome) {
    println!("label\tkind\tcanonical\tscore");
    match outcome {
        Outcome::ExistingStrain => println!("{label}\texisting_strain\t{label}\t1"),
        Outcome::KnownAlias { canonical } => {
            println!("{label}\tknown_alias\t{canonical}\t1");
        }
        Outcome::NewAlias { canonical, score } => {
            println!("{label}\tnew_alias\t{canonical}\t{score}");
        }
        Outcome::AmbiguousMatches { score, candidates } => {
            for candidate in candidates {
                println!("{label}\tambiguous\t{candidate}\t{score}");
            }
        }
        Outcome::NewStrain => println!("{label}\tnew_strain\t\t0"),
    }
}
