//! Shared User-Agent strings for index and download HTTP clients.

/// Project URL for User-Agent identification (good citizenship; RFC 9308).
const PROJECT_UA_URL: &str = "https://github.com/fierce/pdf-harvester";

/// Default User-Agent for PDF download requests.
#[must_use]
pub(crate) fn default_download_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("pdf-harvester/{version} (document-archiver; +{PROJECT_UA_URL})")
}

/// Default User-Agent for the index request.
#[must_use]
pub(crate) fn default_index_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("pdf-harvester/{version} (index-reader; +{PROJECT_UA_URL})")
}
