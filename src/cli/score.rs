//! Score command - compare two labels directly using the similarity scorer.
//!
//! This command scores a pair of labels without consulting the catalog.
//! Useful for checking what the classifier would see for a given spelling.

use clap::Args;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::core::types::Confidence;
use crate::matching::distance::edit_distance;
use crate::matching::normalize::clean;
use crate::matching::scoring::similarity;

/// Arguments for the score command
#[derive(Args)]
pub struct ScoreArgs {
    /// Query label
    #[arg(required = true)]
    pub query: String,

    /// Reference label to compare against
    #[arg(required = true)]
    pub reference: String,
}

/// Result of scoring a label pair
#[derive(Serialize)]
struct ScoreResult {
    query: String,
    query_normalized: String,
    reference: String,
    reference_normalized: String,
    edit_distance: usize,
    similarity: f64,
    confidence: Confidence,
}

/// Execute the score command
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ScoreArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let query_normalized = clean(&args.query);
    let reference_normalized = clean(&args.reference);

    if verbose {
        eprintln!(
            "Comparing normalized forms '{query_normalized}' and '{reference_normalized}'"
        );
    }

    let distance = edit_distance(&query_normalized, &reference_normalized);
    let score = similarity(&args.query, &args.reference);

    let result = ScoreResult {
        query: args.query,
        query_normalized,
        reference: args.reference,
        reference_normalized,
        edit_distance: distance,
        similarity: score,
        confidence: Confidence::from_score(score),
    };

    match format {
        OutputFormat::Text => print_text_result(&result),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Tsv => print_tsv_result(&result),
    }

    Ok(())
}

fn print_text_result(result: &ScoreResult) {
    println!(
        "'{}' vs '{}'",
        result.query, result.reference
    );
    println!(
        "   Normalized: '{}' vs '{}'",
        result.query_normalized, result.reference_normalized
    );
    println!("   Edit distance: {}", result.edit_distance);
    println!(
        "   Similarity: {:.1}% ({} confidence)",
        result.similarity * 100.0,
        result.confidence
    );
}

fn print_tsv_result(result: &ScoreResult) {
    println!("query\treference\tquery_normalized\treference_normalized\tedit_distance\tsimilarity");
    println!(
        "{}\t{}\t{}\t{}\t{}\t{}",
        result.query,
        result.reference,
        result.query_normalized,
        result.reference_normalized,
        result.edit_distance,
        result.similarity
    );
}
