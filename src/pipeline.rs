//! Sequential harvest pipeline.
//!
//! Fetcher → parser → PDF filter → dedup → origin normalization → validity
//! check → download executor. Each stage fails soft, so a run always
//! finishes and reports what happened to every candidate.

use std::path::Path;

use tokio::fs::DirBuilder;
use tracing::{debug, error, info, instrument};

use crate::candidates::{dedup_urls, filter_pdf_urls, is_valid_url, normalize_url};
use crate::config::HarvestConfig;
use crate::download::{DownloadError, DownloadExecutor, DownloadOutcome, HttpClient};
use crate::index::{IndexError, IndexFetcher, parse_index};

/// Permission mode for a newly created output directory on Unix.
#[cfg(unix)]
const OUTPUT_DIR_MODE: u32 = 0o755;

/// Errors constructing a [`Harvester`].
///
/// A constructed harvester never fails at run time.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The index client could not be built.
    #[error(transparent)]
    Index(#[from] IndexError),

    /// The download client could not be built.
    #[error(transparent)]
    Download(#[from] DownloadError),
}

/// Summary of one harvest run.
#[derive(Debug, Default)]
pub struct HarvestReport {
    /// Records decoded from the index.
    pub records: usize,
    /// Records whose URL ends in `.pdf`.
    pub candidates: usize,
    /// Candidates left after removing duplicates.
    pub unique_candidates: usize,
    /// Normalized URLs dropped by the validity check.
    pub invalid_urls: usize,
    /// One outcome per download attempt, in attempt order.
    pub outcomes: Vec<DownloadOutcome>,
}

impl HarvestReport {
    /// Number of new files written.
    #[must_use]
    pub fn downloaded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_new()).count()
    }

    /// Number of URLs whose file already existed.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_skipped()).count()
    }

    /// Number of abandoned URLs.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failed()).count()
    }

    /// Number of URLs handed to the download executor.
    #[must_use]
    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }
}

/// Runs the harvest pipeline for one configuration.
#[derive(Debug, Clone)]
pub struct Harvester {
    config: HarvestConfig,
    fetcher: IndexFetcher,
    executor: DownloadExecutor,
}

impl Harvester {
    /// Builds the index and download clients for `config`.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError`] if either HTTP client cannot be built.
    pub fn new(config: HarvestConfig) -> Result<Self, PipelineError> {
        let fetcher = IndexFetcher::new(config.index_timeout())?;
        let client = HttpClient::with_timeout(config.download_timeout())?;
        Ok(Self {
            config,
            fetcher,
            executor: DownloadExecutor::new(client),
        })
    }

    /// Fetches the index and downloads every new PDF it lists, in order.
    #[instrument(skip(self), fields(endpoint = %self.config.endpoint()))]
    pub async fn run(&self) -> HarvestReport {
        let mut report = HarvestReport::default();
        let targets = self.download_targets(&mut report).await;

        let output_dir = self.config.output_dir();
        ensure_output_dir(output_dir).await;

        for url in targets {
            let outcome = self.executor.download(&url, output_dir).await;
            report.outcomes.push(outcome);
        }

        info!(
            records = report.records,
            candidates = report.unique_candidates,
            invalid = report.invalid_urls,
            downloaded = report.downloaded(),
            skipped = report.skipped(),
            failed = report.failed(),
            "harvest complete"
        );
        report
    }

    /// Returns the URLs a run would hand to the download executor, without
    /// downloading anything or touching the output directory.
    #[instrument(skip(self), fields(endpoint = %self.config.endpoint()))]
    pub async fn plan(&self) -> Vec<String> {
        let mut report = HarvestReport::default();
        self.download_targets(&mut report).await
    }

    async fn download_targets(&self, report: &mut HarvestReport) -> Vec<String> {
        let payload = self.fetcher.fetch(self.config.endpoint()).await;
        let records = parse_index(&payload);
        report.records = records.len();

        let candidates = filter_pdf_urls(&records);
        report.candidates = candidates.len();

        let unique = dedup_urls(candidates);
        report.unique_candidates = unique.len();
        debug!(
            records = report.records,
            candidates = report.candidates,
            unique = report.unique_candidates,
            "selected PDF candidates"
        );

        let origin = self.config.origin();
        let mut targets = Vec::with_capacity(unique.len());
        for candidate in unique {
            let url = normalize_url(&candidate, origin);
            if is_valid_url(&url) {
                targets.push(url);
            } else {
                debug!(url = %url, "skipping invalid URL");
                report.invalid_urls += 1;
            }
        }
        targets
    }
}

/// Creates the output directory if it is missing.
///
/// Failure is logged, not returned: each download will then fail on its own
/// and be reported per URL.
async fn ensure_output_dir(path: &Path) {
    if tokio::fs::metadata(path)
        .await
        .is_ok_and(|meta| meta.is_dir())
    {
        return;
    }

    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    builder.mode(OUTPUT_DIR_MODE);

    match builder.create(path).await {
        Ok(()) => info!(path = %path.display(), "created output directory"),
        Err(e) => error!(path = %path.display(), error = %e, "failed to create output directory"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_ensure_output_dir_creates_nested_directory() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("a").join("PDFs");

        ensure_output_dir(&target).await;

        assert!(target.is_dir());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_ensure_output_dir_uses_0755() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("PDFs");

        ensure_output_dir(&target).await;

        let mode = std::fs::metadata(&target).unwrap().permissions().mode() & 0o777;
        // The process umask can only remove bits.
        assert_eq!(mode & !OUTPUT_DIR_MODE, 0);
        assert_ne!(mode & 0o700, 0);
    }

    #[tokio::test]
    async fn test_ensure_output_dir_failure_is_not_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("file");
        std::fs::write(&blocker, b"x").unwrap();

        ensure_output_dir(&blocker.join("PDFs")).await;

        assert!(blocker.is_file());
    }

    #[test]
    fn test_report_counts_outcomes() {
        let report = HarvestReport {
            outcomes: vec![
                DownloadOutcome::Downloaded {
                    url: "u1".into(),
                    path: "p1".into(),
                    bytes: 1,
                },
                DownloadOutcome::Skipped {
                    url: "u2".into(),
                    path: "p2".into(),
                },
                DownloadOutcome::Failed {
                    url: "u3".into(),
                    error: DownloadError::empty_body("u3"),
                },
            ],
            ..HarvestReport::default()
        };

        assert_eq!(report.downloaded(), 1);
        assert_eq!(report.skipped(), 1);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.attempted(), 3);
    }
}
