//! bibfmt CLI - render a sorted bibliography from a JSON source list.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use bibfmt_records::Record;
use bibfmt_styles::{Bibliography, Style, StyleRegistry};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bibfmt")]
#[command(version)]
#[command(about = "Render bibliographic source records as a sorted citation list", long_about = None)]
struct Cli {
    /// JSON file holding an array of tagged source records
    input: PathBuf,

    /// Citation style (apa, gost)
    #[arg(short, long, default_value = "gost")]
    style: Style,

    /// Write the bibliography to FILE instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bibfmt=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let source = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    let records = load_records(&source)
        .with_context(|| format!("invalid source records in {}", cli.input.display()))?;

    tracing::info!(count = records.len(), style = %cli.style, "formatting bibliography");

    let registry = StyleRegistry::default();
    let entries = registry.entries(cli.style, records)?;
    let bibliography = Bibliography::from_entries(entries);

    match cli.output {
        Some(path) => fs::write(&path, format!("{}\n", bibliography.render()))
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{}", bibliography.render()),
    }

    Ok(())
}

/// Parse a JSON array of tagged records and validate each one before it can
/// reach a formatter.
fn load_records(source: &str) -> Result<Vec<Record>> {
    let records: Vec<Record> = serde_json::from_str(source)?;
    for (index, record) in records.iter().enumerate() {
        record
            .validate()
            .with_context(|| format!("record #{index}"))?;
    }
    Ok(records)
}
