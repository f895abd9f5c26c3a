//! Per-document download outcomes.

use std::path::{Path, PathBuf};

use super::DownloadError;

/// Result of one guarded fetch-and-persist attempt.
#[derive(Debug)]
pub enum DownloadOutcome {
    /// The document was fetched and written to `path`.
    Downloaded {
        /// Normalized document URL.
        url: String,
        /// Where the document was written.
        path: PathBuf,
        /// Number of bytes written.
        bytes: u64,
    },
    /// A file already existed at `path`; no request was sent.
    Skipped {
        /// Normalized document URL.
        url: String,
        /// The existing file.
        path: PathBuf,
    },
    /// The attempt was abandoned.
    Failed {
        /// Normalized document URL.
        url: String,
        /// Why the attempt was abandoned.
        error: DownloadError,
    },
}

impl DownloadOutcome {
    /// Returns true only when a new file was written.
    #[must_use]
    pub fn is_new(&self) -> bool {
        matches!(self, Self::Downloaded { .. })
    }

    #[must_use]
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// The URL this outcome belongs to.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Downloaded { url, .. } | Self::Skipped { url, .. } | Self::Failed { url, .. } => {
                url.as_str()
            }
        }
    }

    /// The local file, for downloaded and skipped documents.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Downloaded { path, .. } | Self::Skipped { path, .. } => Some(path.as_path()),
            Self::Failed { .. } => None,
        }
    }

    /// The failure reason, for failed documents.
    #[must_use]
    pub fn error(&self) -> Option<&DownloadError> {
        match self {
            Self::Failed { error, .. } => Some(error),
            _ => None,
        }
    }
}
