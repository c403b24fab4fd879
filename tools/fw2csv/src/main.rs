//! CLI tool for converting fixed-width files to CSV.
//!
//! # Usage
//!
//! ```bash
//! # Convert using a JSON layout specification
//! fw2csv --spec spec.json --input fixed_width.txt --output output.csv
//!
//! # Show progress
//! RUST_LOG=info fw2csv -s spec.json -i fixed_width.txt -o output.csv
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use fixed_width::prelude::*;
use tracing::debug;

/// Convert a fixed-width file to CSV.
///
/// Field widths, column names, encodings and the header flag are read
/// from a JSON layout specification.
#[derive(Parser, Debug)]
#[command(name = "fw2csv")]
#[command(version, about)]
struct Args {
    /// Layout specification (JSON).
    #[arg(short, long)]
    spec: PathBuf,

    /// Fixed-width input file.
    #[arg(short, long)]
    input: PathBuf,

    /// CSV output file. Created or overwritten.
    #[arg(short, long)]
    output: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let converter = Converter::from_spec_file(&args.spec).with_context(|| {
        format!("Failed to load layout specification: {}", args.spec.display())
    })?;
    debug!(
        fields = converter.layout().field_count(),
        line_width = converter.layout().line_width(),
        "layout ready"
    );

    let summary = convert(&converter, &args)?;

    // Report to stderr, like the log output
    eprintln!("Converted {} record(s)", summary.records);

    Ok(())
}

fn convert(converter: &Converter, args: &Args) -> Result<ConvertSummary> {
    converter.process(&args.input, &args.output).with_context(|| {
        format!("Failed to convert '{}' to '{}'", args.input.display(), args.output.display())
    })
}
