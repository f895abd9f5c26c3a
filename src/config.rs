//! Pipeline configuration.
//!
//! The defaults reproduce the fixed constants of the harvester: the Bayer
//! Crop Science document index, its origin, and a `PDFs/` output directory.
//! Tests and the CLI substitute their own values through the `with_*`
//! builders.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default index endpoint returning a JSON array of `{ "url": ... }` records.
pub const DEFAULT_ENDPOINT: &str = "https://cropscience.bayer.co.uk/api/documents";

/// Default origin prepended to relative document URLs.
pub const DEFAULT_ORIGIN: &str = "https://cropscience.bayer.co.uk";

/// Default output directory for downloaded documents.
pub const DEFAULT_OUTPUT_DIR: &str = "PDFs/";

/// Default total timeout for a single document download (30 seconds).
pub const DEFAULT_DOWNLOAD_TIMEOUT_SECS: u64 = 30;

/// Runtime settings for one harvest run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestConfig {
    endpoint: String,
    origin: String,
    output_dir: PathBuf,
    download_timeout: Duration,
    index_timeout: Option<Duration>,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            origin: DEFAULT_ORIGIN.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            download_timeout: Duration::from_secs(DEFAULT_DOWNLOAD_TIMEOUT_SECS),
            index_timeout: None,
        }
    }
}

impl HarvestConfig {
    /// Creates a configuration with the default constants.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the index endpoint URL.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Overrides the origin used to absolutize relative document URLs.
    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Overrides the output directory.
    #[must_use]
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Overrides the per-document download timeout.
    #[must_use]
    pub fn with_download_timeout(mut self, timeout: Duration) -> Self {
        self.download_timeout = timeout;
        self
    }

    /// Sets a timeout for the index request. `None` leaves the transport default (no timeout).
    #[must_use]
    pub fn with_index_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.index_timeout = timeout;
        self
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    #[must_use]
    pub fn download_timeout(&self) -> Duration {
        self.download_timeout
    }

    #[must_use]
    pub fn index_timeout(&self) -> Option<Duration> {
        self.index_timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_constants() {
        let config = HarvestConfig::default();
        assert_eq!(config.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(config.origin(), DEFAULT_ORIGIN);
        assert_eq!(config.output_dir(), Path::new("PDFs/"));
        assert_eq!(config.download_timeout(), Duration::from_secs(30));
        assert_eq!(config.index_timeout(), None);
    }

    #[test]
    fn test_builders_override_each_field() {
        let config = HarvestConfig::new()
            .with_endpoint("http://127.0.0.1:9/api/documents")
            .with_origin("http://127.0.0.1:9")
            .with_output_dir("/tmp/out")
            .with_download_timeout(Duration::from_secs(5))
            .with_index_timeout(Some(Duration::from_secs(2)));

        assert_eq!(config.endpoint(), "http://127.0.0.1:9/api/documents");
        assert_eq!(config.origin(), "http://127.0.0.1:9");
        assert_eq!(config.output_dir(), Path::new("/tmp/out"));
        assert_eq!(config.download_timeout(), Duration::from_secs(5));
        assert_eq!(config.index_timeout(), Some(Duration::from_secs(2)));
    }
}
