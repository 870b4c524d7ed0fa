//! litscan CLI - find repeated literals that could be replaced by a constant.
//!
//! Scans a Rust source tree (recursively with a trailing `...` on the
//! path), indexes repeated string and numeric literals, and optionally
//! matches them against existing exported constants.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use std::path::Path;

use litscan_core::{
    filter_index, init_structured_logging, load_config, render_json, render_text, Litscan,
    ReportOptions,
};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Find repeated literals that could be replaced by a constant",
    after_help = "Examples:\n\
        \x20 litscan ./...\n\
        \x20 litscan --ignore 'generated|\\.pb\\.' crates/server/...\n\
        \x20 litscan --min-occurrences 3 --output json .\n\
        \x20 litscan --numbers --min 60 --max 512 src/..."
)]
pub struct Cli {
    /// Path to scan; append `...` to include all subdirectories
    #[arg(default_value = ".")]
    path: String,

    /// Exclude files matching the given regular expression
    #[arg(long)]
    ignore: Option<String>,

    /// Include test files in the search
    #[arg(long)]
    include_tests: bool,

    /// Report from how many occurrences
    #[arg(long, value_name = "N")]
    min_occurrences: Option<usize>,

    /// Look for existing constants matching the literals
    #[arg(long)]
    match_constant: bool,

    /// Search also for duplicated numbers
    #[arg(long)]
    numbers: bool,

    /// Minimum value, only works with --numbers
    #[arg(long, value_name = "N")]
    min: Option<i64>,

    /// Maximum value, only works with --numbers
    #[arg(long, value_name = "N")]
    max: Option<i64>,

    /// Output formatting
    #[arg(long, value_enum)]
    output: Option<OutputFormat>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    // Structured logging to stderr keeps stdout clean for the report.
    init_structured_logging();

    let cli = Cli::parse();

    // litscan.toml in the scanned root supplies defaults; flags win.
    let (base, _) = litscan_core::split_path_spec(&cli.path);
    let config = load_config(Path::new(base))
        .with_context(|| format!("Failed to load litscan.toml from {}", base))?
        .unwrap_or_default();
    let report_cfg = config.report.unwrap_or_default();

    let ignore = cli.ignore.or(config.ignore);
    let options = ReportOptions {
        min_occurrences: cli
            .min_occurrences
            .or(report_cfg.min_occurrences)
            .unwrap_or(2),
        min_value: cli.min.or(report_cfg.min).unwrap_or(0),
        max_value: cli.max.or(report_cfg.max).unwrap_or(0),
    };
    let format = match cli.output {
        Some(format) => format,
        None => match config.output.and_then(|o| o.format).as_deref() {
            Some("json") => OutputFormat::Json,
            Some("text") | None => OutputFormat::Text,
            Some(other) => bail!("Unsupported output format: {}", other),
        },
    };

    let mut scan = Litscan::new(&cli.path)
        .ignore_tests(!cli.include_tests)
        .match_constants(cli.match_constant)
        .include_numbers(cli.numbers);
    if let Some(pattern) = ignore {
        scan = scan.ignore(pattern);
    }

    let outcome = scan
        .scan()
        .with_context(|| format!("Failed to scan {}", cli.path))?;

    for skipped in &outcome.skipped {
        eprintln!("litscan: skipped {}: {}", skipped.path, skipped.reason);
    }

    let strings = filter_index(&outcome.strings, &options);
    match format {
        OutputFormat::Text => print!("{}", render_text(&strings, &outcome.constants)),
        OutputFormat::Json => println!(
            "{}",
            render_json(&strings, &outcome.constants).context("JSON serialization failed")?
        ),
    }

    Ok(())
}
