//! Write-once persistence of downloaded documents.
//!
//! Bytes are written to a hidden sibling `.part` file and published under
//! the target name only once fully flushed, so the target path never holds
//! a truncated document. Publishing never replaces an existing file. A drop
//! guard removes the `.part` file on every path that does not rename it.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use super::DownloadError;
use super::filename::partial_path;

/// Returns true if a non-directory file already exists at `path`.
pub(crate) async fn artifact_exists(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .is_ok_and(|meta| !meta.is_dir())
}

/// Removes the temporary file on drop unless the write was committed.
struct PartialFileGuard {
    path: PathBuf,
    committed: bool,
}

impl PartialFileGuard {
    fn new(path: PathBuf) -> Self {
        Self {
            path,
            committed: false,
        }
    }

    fn commit(mut self) {
        self.committed = true;
    }
}

impl Drop for PartialFileGuard {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        match std::fs::remove_file(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "removed partial file"),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => warn!(
                path = %self.path.display(),
                error = %e,
                "failed to remove partial file"
            ),
        }
    }
}

/// Writes `bytes` to `target` in one operation via a temporary sibling file.
///
/// The target is published with a hard link, which fails instead of
/// replacing a file that appeared after the caller's existence check. On
/// file systems without hard links it falls back to a rename.
///
/// # Errors
///
/// Returns [`DownloadError::Io`] if the temporary file cannot be created,
/// written, or synced, or if publishing fails. An `AlreadyExists` source
/// means the target was left untouched. No temporary file is left behind.
pub(crate) async fn write_artifact(target: &Path, bytes: &[u8]) -> Result<(), DownloadError> {
    let partial = partial_path(target);
    let guard = PartialFileGuard::new(partial.clone());

    let mut file = File::create(&partial)
        .await
        .map_err(|e| DownloadError::io(partial.clone(), e))?;
    file.write_all(bytes)
        .await
        .map_err(|e| DownloadError::io(partial.clone(), e))?;
    file.flush()
        .await
        .map_err(|e| DownloadError::io(partial.clone(), e))?;
    file.sync_all()
        .await
        .map_err(|e| DownloadError::io(partial.clone(), e))?;
    drop(file);

    match tokio::fs::hard_link(&partial, target).await {
        // The guard drops the temporary name; the target keeps the data.
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            warn!(
                path = %target.display(),
                "target appeared during download, leaving existing file untouched"
            );
            Err(DownloadError::io(target.to_path_buf(), e))
        }
        Err(e) => {
            debug!(error = %e, "hard link unavailable, falling back to rename");
            tokio::fs::rename(&partial, target)
                .await
                .map_err(|e| DownloadError::io(target.to_path_buf(), e))?;
            guard.commit();
            Ok(())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_artifact_exists_for_regular_file_only() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("x.pdf");
        let dir = temp_dir.path().join("y.pdf");
        std::fs::write(&file, b"%PDF").unwrap();
        std::fs::create_dir(&dir).unwrap();

        assert!(artifact_exists(&file).await);
        assert!(!artifact_exists(&dir).await);
        assert!(!artifact_exists(&temp_dir.path().join("z.pdf")).await);
    }

    #[tokio::test]
    async fn test_write_artifact_persists_exact_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("doc.pdf");

        write_artifact(&target, b"%PDF-1.7 body").await.unwrap();

        assert_eq!(std::fs::read(&target).unwrap(), b"%PDF-1.7 body");
        assert!(!partial_path(&target).exists(), "partial file must be removed");
    }

    #[tokio::test]
    async fn test_write_artifact_missing_directory_leaves_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("missing").join("doc.pdf");

        let result = write_artifact(&target, b"%PDF").await;

        assert!(matches!(result, Err(DownloadError::Io { .. })));
        assert!(!target.exists());
        assert!(!partial_path(&target).exists());
    }

    #[tokio::test]
    async fn test_write_artifact_never_replaces_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("doc.pdf");
        std::fs::write(&target, b"first").unwrap();

        let result = write_artifact(&target, b"second").await;

        match result {
            Err(DownloadError::Io { path, source }) => {
                assert_eq!(path, target);
                assert_eq!(source.kind(), ErrorKind::AlreadyExists);
            }
            other => panic!("Expected AlreadyExists Io error, got: {other:?}"),
        }
        assert_eq!(std::fs::read(&target).unwrap(), b"first");
        assert!(!partial_path(&target).exists(), "partial file must be cleaned up");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_write_artifact_failed_publish_removes_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("doc.pdf");
        // A directory in the way makes publishing fail after the write succeeded.
        std::fs::create_dir(&target).unwrap();

        let result = write_artifact(&target, b"%PDF").await;

        match result {
            Err(DownloadError::Io { path, .. }) => assert_eq!(path, target),
            other => panic!("Expected Io error, got: {other:?}"),
        }
        assert!(target.is_dir());
        assert!(!partial_path(&target).exists(), "partial file must be cleaned up");
    }
}
