//! CLI entry point for the tabular EDA report.

use anyhow::{Result, anyhow};
use clap::Parser;
use std::path::Path;
use tabprof::{build_report, load_dataset};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Exploratory analysis of two tabular datasets",
    long_about = "Loads two CSV files, profiles every column (nulls, distinct values,\n\
                  declared types), and compares the schemas side by side.\n\n\
                  EXAMPLES:\n  \
                  # Default text report\n  \
                  tabprof hotel-booking.csv customer-reservations.csv\n\n  \
                  # Friendly dataset labels\n  \
                  tabprof a.csv b.csv --name-a \"Hotel Booking\" --name-b \"Reservations\"\n\n  \
                  # Machine-readable output\n  \
                  tabprof a.csv b.csv --json | jq .types.mismatches"
)]
struct Args {
    /// Path to the first CSV file
    file_a: String,

    /// Path to the second CSV file
    file_b: String,

    /// Display label for the first dataset
    ///
    /// Defaults to the file name without extension
    #[arg(long)]
    name_a: Option<String>,

    /// Display label for the second dataset
    #[arg(long)]
    name_b: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress progress output (only show errors)
    #[arg(short, long)]
    quiet: bool,

    /// Output the report as pretty JSON instead of text tables
    ///
    /// Disables all progress logs; only the report is written to stdout.
    #[arg(long)]
    json: bool,
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging is completely disabled to ensure
/// only JSON is written to stdout.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Extract the file stem (name without extension) from a path.
fn file_stem(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(path)
        .to_string()
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.json);

    for path in [&args.file_a, &args.file_b] {
        if !Path::new(path).exists() {
            return Err(anyhow!("Input file not found: {}", path));
        }
    }

    let name_a = args.name_a.clone().unwrap_or_else(|| file_stem(&args.file_a));
    let name_b = args.name_b.clone().unwrap_or_else(|| file_stem(&args.file_b));

    info!("Loading datasets...");
    let a = load_dataset(&args.file_a, &name_a)?;
    info!("{} loaded: {} rows", a.name, a.df.height());
    let b = load_dataset(&args.file_b, &name_b)?;
    info!("{} loaded: {} rows", b.name, b.df.height());

    let report = build_report(&a, &b)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let stdout = std::io::stdout();
        tabprof::render_report(&report, &mut stdout.lock())?;
    }

    Ok(())
}
