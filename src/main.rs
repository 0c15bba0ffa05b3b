//! # Main — CLI entry point
//!
//! Reads one campaign batch (stdin or `--input`), estimates its execution
//! time and prints exactly one line: the total time, or `InvalidCampaigns`
//! when two campaign names collide ignoring case.
//!
//! Malformed input is reported on stderr with a non-zero exit status.
//! Logs always go to stderr so stdout carries only the result;
//! `RUST_LOG` sets the filter and `LOG_FORMAT=json` switches to JSON lines.

use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use campaign_schedule::classifier;
use campaign_schedule::scheduler::{ExecutionEstimator, DEFAULT_SLOTS_PER_CORE};

#[derive(Parser)]
#[command(
    name = "campaign-schedule",
    version,
    about = "Estimate total execution time for a batch of campaigns"
)]
struct Cli {
    /// Read the batch from this file instead of stdin
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Worker slots exposed by each core
    #[arg(
        long,
        env = "CAMPAIGN_SLOTS_PER_CORE",
        default_value_t = DEFAULT_SLOTS_PER_CORE,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    slots_per_core: u64,

    /// Output format: the bare total, or the full breakdown as JSON
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("campaign_schedule=warn"));

    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    if log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .init();
    }
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let batch = match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open batch file {}", path.display()))?;
            classifier::read_batch(file)
        }
        None => classifier::read_batch(io::stdin().lock()),
    };

    let estimator = ExecutionEstimator::new().with_slots_per_core(cli.slots_per_core);
    let estimate = match batch.and_then(|batch| estimator.estimate(&batch)) {
        Ok(estimate) => estimate,
        Err(e) if e.is_invalid_campaigns() => {
            println!("InvalidCampaigns");
            return Ok(());
        }
        Err(e) => return Err(e).context("failed to estimate campaign execution time"),
    };

    match cli.format {
        OutputFormat::Text => println!("{}", estimate.total_time()),
        OutputFormat::Json => println!("{}", serde_json::to_string(&estimate)?),
    }
    Ok(())
}
