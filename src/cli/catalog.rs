use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::catalog::store::StrainCatalog;
use crate::cli::OutputFormat;

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List all strains in the catalog
    List {
        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Filter by tag (e.g., "sativa")
        #[arg(long)]
        tag: Option<String>,
    },

    /// Show details of a specific strain
    Show {
        /// Canonical strain name
        #[arg(required = true)]
        name: String,

        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Export the catalog to a file
    Export {
        /// Output file path
        #[arg(required = true)]
        output: PathBuf,

        /// Path to custom catalog file to export (defaults to embedded)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

/// Execute catalog subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded, a requested strain does
/// not exist, or the export file cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CatalogArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    match args.command {
        CatalogCommands::List { catalog, tag } => {
            let catalog = load_catalog(catalog.as_deref(), verbose)?;
            list_strains(&catalog, tag.as_deref(), format)
        }
        CatalogCommands::Show { name, catalog } => {
            let catalog = load_catalog(catalog.as_deref(), verbose)?;
            show_strain(&catalog, &name, format)
        }
        CatalogCommands::Export { output, catalog } => {
            let catalog = load_catalog(catalog.as_deref(), verbose)?;
            let json = catalog.to_json()?;
            std::fs::write(&output, json)?;
            println!("Exported {} strains to {}", catalog.len(), output.display());
            Ok(())
        }
    }
}

fn load_catalog(path: Option<&std::path::Path>, verbose: bool) -> anyhow::Result<StrainCatalog> {
    let catalog = if let Some(path) = path {
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

    Ok(catalog)
}

fn list_strains(
    catalog: &StrainCatalog,
    tag: Option<&str>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let strains: Vec<_> = catalog
        .strains()
        .iter()
        .filter(|s| tag.map_or(true, |t| s.has_tag(t)))
        .collect();

    match format {
        OutputFormat::Text => {
            for strain in &strains {
                if strain.aliases.is_empty() {
                    println!("{}", strain.name);
                } else {
                    println!("{} (aliases: {})", strain.name, strain.aliases.join(", "));
                }
            }
            println!("\n{} strains", strains.len());
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&strains)?);
        }
        OutputFormat::Tsv => {
            println!("name\taliases\ttags");
            for strain in &strains {
                println!(
                    "{}\t{}\t{}",
                    strain.name,
                    strain.aliases.join(","),
                    strain.tags.join(",")
                );
            }
        }
    }

    Ok(())
}

fn show_strain(catalog: &StrainCatalog, name: &str, format: OutputFormat) -> anyhow::Result<()> {
    let strain = catalog
        .get(name)
        .ok_or_else(|| anyhow::anyhow!("Strain '{name}' not found in catalog"))?;

    match format {
        OutputFormat::Text => {
            println!("{}", strain.name);
            if !strain.aliases.is_empty() {
                println!("   Aliases: {}", strain.aliases.join(", "));
            }
            if let Some(description) = &strain.description {
                println!("   Description: {description}");
            }
            if !strain.tags.is_empty() {
                println!("   Tags: {}", strain.tags.join(", "));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(strain)?);
        }
        OutputFormat::Tsv => {
            println!("name\taliases\ttags");
            println!(
                "{}\t{}\t{}",
                strain.name,
                strain.aliases.join(","),
                strain.tags.join(",")
            );
        }
    }

    Ok(())
}
