//! PDF Harvester Core Library
//!
//! This library provides the core functionality for the harvester tool,
//! which reads a remote JSON document index, picks out the PDF links it
//! lists, and downloads each one into a local directory exactly once.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`config`] - Pipeline configuration (endpoint, origin, output directory, timeouts)
//! - [`index`] - Index fetching and JSON decoding
//! - [`candidates`] - PDF filtering, deduplication, origin normalization, validity checks
//! - [`download`] - Validated fetch-and-persist of a single document
//! - [`pipeline`] - Sequential driver tying the stages together

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod candidates;
pub mod config;
pub mod download;
pub mod index;
pub mod pipeline;
#[cfg(test)]
pub mod test_support;
pub(crate) mod user_agent;

// Re-export commonly used types
pub use candidates::{dedup_urls, file_extension, filter_pdf_urls, is_valid_url, normalize_url};
pub use config::{
    DEFAULT_DOWNLOAD_TIMEOUT_SECS, DEFAULT_ENDPOINT, DEFAULT_ORIGIN, DEFAULT_OUTPUT_DIR,
    HarvestConfig,
};
pub use download::{DownloadError, DownloadExecutor, DownloadOutcome, HttpClient};
pub use index::{DocumentRecord, IndexError, IndexFetcher, parse_index};
pub use pipeline::{HarvestReport, Harvester, PipelineError};
