//! Guarded fetch-and-persist for a single document URL.
//!
//! Per URL the executor resolves the local path, skips when a file is
//! already there, fetches and validates the response, and only then writes
//! the buffered bytes. Every failure is logged with the URL and turned into
//! [`DownloadOutcome::Failed`]; nothing propagates to the caller.

use std::path::Path;

use tracing::{info, instrument, warn};

use super::filename::artifact_path;
use super::persistence::{artifact_exists, write_artifact};
use super::{DownloadError, DownloadOutcome, HttpClient};

/// Downloads documents one at a time into an output directory.
#[derive(Debug, Clone)]
pub struct DownloadExecutor {
    client: HttpClient,
}

impl DownloadExecutor {
    /// Creates an executor that sends requests through `client`.
    #[must_use]
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Downloads `url` into `output_dir` unless the file already exists.
    ///
    /// [`DownloadOutcome::is_new`] on the result is true only if a new file
    /// was written.
    #[instrument(skip(self, output_dir), fields(url = %url))]
    pub async fn download(&self, url: &str, output_dir: &Path) -> DownloadOutcome {
        match self.try_download(url, output_dir).await {
            Ok(outcome) => outcome,
            Err(error) => {
                warn!(url = %url, kind = error.kind(), error = %error, "download failed");
                DownloadOutcome::Failed {
                    url: url.to_string(),
                    error,
                }
            }
        }
    }

    async fn try_download(
        &self,
        url: &str,
        output_dir: &Path,
    ) -> Result<DownloadOutcome, DownloadError> {
        let path = artifact_path(url, output_dir)?;

        if artifact_exists(&path).await {
            info!(path = %path.display(), "file already exists, skipping");
            return Ok(DownloadOutcome::Skipped {
                url: url.to_string(),
                path,
            });
        }

        let body = self.client.fetch_pdf(url).await?;
        write_artifact(&path, &body).await?;

        let bytes = body.len() as u64;
        info!(bytes, url = %url, path = %path.display(), "download complete");
        Ok(DownloadOutcome::Downloaded {
            url: url.to_string(),
            path,
            bytes,
        })
    }
}
