//! Validated fetch-and-persist of single PDF documents.
//!
//! # Features
//!
//! - Write-once local artifacts named by the URL's final path segment
//! - Existing files short-circuit before any network call
//! - Status (200 only) and `Content-Type` (`application/pdf`) validation
//! - Full in-memory buffering; empty bodies are rejected
//! - Temp-file-then-link persistence that never replaces an existing file
//!
//! # Example
//!
//! ```no_run
//! use harvester_core::download::{DownloadExecutor, HttpClient};
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let executor = DownloadExecutor::new(HttpClient::new()?);
//! let outcome = executor
//!     .download("https://cropscience.bayer.co.uk/docs/label.pdf", Path::new("PDFs"))
//!     .await;
//! println!("new file written: {}", outcome.is_new());
//! # Ok(())
//! # }
//! ```

mod client;
mod constants;
mod error;
mod executor;
mod filename;
mod outcome;
mod persistence;

pub use client::HttpClient;
pub use constants::PDF_CONTENT_TYPE;
pub use error::DownloadError;
pub use executor::DownloadExecutor;
pub use filename::artifact_path;
pub use outcome::DownloadOutcome;
