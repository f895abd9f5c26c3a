//! CLI entry point for the PDF harvester.

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use harvester_core::{HarvestConfig, Harvester};
use tracing::{debug, info};

mod cli;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    // Logs go to stderr so --dry-run output on stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!(?args, "CLI arguments parsed");

    let config = HarvestConfig::new()
        .with_endpoint(args.endpoint)
        .with_origin(args.origin)
        .with_output_dir(args.output_dir)
        .with_download_timeout(Duration::from_secs(args.timeout))
        .with_index_timeout(args.index_timeout.map(Duration::from_secs));

    let harvester = Harvester::new(config)?;

    if args.dry_run {
        let targets = harvester.plan().await;
        info!(count = targets.len(), "dry run: no files will be downloaded");
        for url in targets {
            println!("{url}");
        }
        return Ok(());
    }

    // Individual download failures are logged per URL and never change the exit code.
    let report = harvester.run().await;
    debug!(attempted = report.attempted(), "run finished");

    Ok(())
}
