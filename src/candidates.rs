//! Candidate URL selection: PDF filtering, deduplication, origin
//! normalization, and syntactic validity checks.
//!
//! None of these steps can fail. Input that does not fit is dropped
//! silently and left for the caller to count.

use std::collections::HashSet;

use tracing::trace;
use url::Url;

use crate::index::DocumentRecord;

/// Extension a candidate URL must carry, compared case-sensitively.
pub const PDF_EXTENSION: &str = ".pdf";

/// Returns the extension of the last path segment of `url`, dot included.
///
/// Query strings and fragments are ignored. Returns `None` when the last
/// segment has no dot.
///
/// # Examples
///
/// ```
/// use harvester_core::file_extension;
///
/// assert_eq!(file_extension("/docs/label.pdf?v=2"), Some(".pdf"));
/// assert_eq!(file_extension("/docs.d/readme"), None);
/// ```
#[must_use]
pub fn file_extension(url: &str) -> Option<&str> {
    let path = url.find(['?', '#']).map_or(url, |end| &url[..end]);
    let segment = path.rfind('/').map_or(path, |slash| &path[slash + 1..]);
    segment.rfind('.').map(|dot| &segment[dot..])
}

/// Keeps the URLs of records whose path ends in exactly `.pdf`, in order.
#[must_use]
pub fn filter_pdf_urls(records: &[DocumentRecord]) -> Vec<String> {
    records
        .iter()
        .filter(|record| file_extension(&record.url) == Some(PDF_EXTENSION))
        .map(|record| record.url.clone())
        .collect()
}

/// Removes repeated URLs, keeping the first occurrence of each.
///
/// Comparison is exact string equality; no normalization happens before
/// this stage.
#[must_use]
pub fn dedup_urls<I>(urls: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for url in urls {
        if seen.insert(url.clone()) {
            unique.push(url);
        } else {
            trace!(url = %url, "dropping duplicate candidate");
        }
    }
    unique
}

/// Makes `url` absolute against `origin`.
///
/// This is a plain prefix test: a URL that already starts with the exact
/// origin string is returned unchanged, and anything else gets the origin
/// prepended. An absolute URL on a different host is therefore concatenated
/// onto the origin, producing a malformed target.
#[must_use]
pub fn normalize_url(url: &str, origin: &str) -> String {
    if url.starts_with(origin) {
        url.to_string()
    } else {
        format!("{origin}{url}")
    }
}

/// Returns true if `url` parses as an absolute URL with a scheme and a host.
#[must_use]
pub fn is_valid_url(url: &str) -> bool {
    Url::parse(url).is_ok_and(|parsed| parsed.host_str().is_some_and(|host| !host.is_empty()))
}
