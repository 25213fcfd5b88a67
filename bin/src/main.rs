//! carpark CLI - Export real-time carpark availability as CSV.

use anyhow::{Context, Result};
use carpark_lib::prelude::*;
use clap::Parser;
use std::time::Duration;
use tracing::info;

mod logging;
mod pipeline;

#[derive(Parser)]
#[command(name = "carpark")]
#[command(about = "Export real-time carpark lot availability as CSV", long_about = None)]
#[command(version)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    quiet: bool,

    /// Request timeout in seconds
    #[arg(long, default_value = "30", value_parser = clap::value_parser!(u64).range(1..))]
    timeout: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let config = ClientConfig {
        timeout: Duration::from_secs(cli.timeout),
        ..ClientConfig::default()
    };

    let report = pipeline::collect_report(config)
        .await
        .context("Failed to collect carpark availability")?;

    report
        .print_carpark_availability_csv()
        .context("Failed to write CSV to stdout")?;

    info!(rows = report.len(), "export complete");
    Ok(())
}
