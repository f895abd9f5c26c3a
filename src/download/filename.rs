//! Local artifact naming: URL basename extraction and sanitization.

use std::path::{Component, Path, PathBuf};

use url::Url;

use super::DownloadError;
use super::constants::PARTIAL_FILE_SUFFIX;

/// Returns the local path a document URL is stored at: its final path
/// segment joined to `output_dir`.
///
/// # Errors
///
/// Returns [`DownloadError::InvalidUrl`] if the URL does not parse, or
/// [`DownloadError::NoFilename`] if its path ends without a segment.
pub fn artifact_path(url: &str, output_dir: &Path) -> Result<PathBuf, DownloadError> {
    let parsed = Url::parse(url).map_err(|_| DownloadError::invalid_url(url))?;
    let filename = filename_from_url(&parsed).ok_or_else(|| DownloadError::no_filename(url))?;
    Ok(output_dir.join(filename))
}

/// Sibling temporary path a download is written to before it is published
/// as `target`.
pub(crate) fn partial_path(target: &Path) -> PathBuf {
    let name = target
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    target.with_file_name(format!(".{name}{PARTIAL_FILE_SUFFIX}"))
}

/// Final path segment of `url` exactly as it appears in the URL, with
/// percent-escapes kept, so `Safety%20Sheet.pdf` is stored under that name.
/// Only characters unsafe in a file name are replaced.
///
/// Returns `None` for URLs whose path ends in `/` or has no segments.
pub(crate) fn filename_from_url(url: &Url) -> Option<String> {
    let last = url.path_segments()?.next_back()?;
    if last.is_empty() {
        return None;
    }
    let sanitized = sanitize_filename(last);
    (!sanitized.is_empty()).then_some(sanitized)
}

/// Replaces characters that are unsafe in file names and neutralizes
/// relative components such as `..`.
pub(crate) fn sanitize_filename(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if is_safe_filename_segment(&sanitized) {
        sanitized
    } else {
        sanitized
            .chars()
            .map(|c| if c == '.' { '_' } else { c })
            .collect()
    }
}

fn is_safe_filename_segment(name: &str) -> bool {
    !Path::new(name).components().any(|component| {
        matches!(
            component,
            Component::CurDir | Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    })
}
