//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

use harvester_core::{
    DEFAULT_DOWNLOAD_TIMEOUT_SECS, DEFAULT_ENDPOINT, DEFAULT_ORIGIN, DEFAULT_OUTPUT_DIR,
};

/// Harvest PDF documents listed by a remote JSON document index.
///
/// Fetches the index, keeps the `.pdf` links, and downloads each one into
/// the output directory. Files that already exist are never re-downloaded.
#[derive(Parser, Debug)]
#[command(name = "pdf-harvester")]
#[command(author, version, about)]
pub struct Args {
    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Document index endpoint returning a JSON array of {"url": ...} objects
    #[arg(short = 'e', long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Origin prepended to document URLs that do not already start with it
    #[arg(long, default_value = DEFAULT_ORIGIN)]
    pub origin: String,

    /// Directory downloaded PDFs are written to
    #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Total timeout per document download in seconds (1-3600)
    #[arg(short = 't', long, default_value_t = DEFAULT_DOWNLOAD_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..=3600))]
    pub timeout: u64,

    /// Timeout for the index request in seconds (no timeout when omitted)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=3600))]
    pub index_timeout: Option<u64>,

    /// List the URLs that would be downloaded without downloading them
    #[arg(long)]
    pub dry_run: bool,
}
