//! Index payload decoding.

use serde::Deserialize;
use tracing::{debug, warn};

use super::IndexError;

/// One entry of the document index.
///
/// Only the `url` field is read; any other fields in the payload are
/// ignored. A record without a `url` decodes with an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DocumentRecord {
    #[serde(default)]
    pub url: String,
}

impl DocumentRecord {
    /// Creates a record for the given URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Decodes an index payload, returning the decode error on failure.
///
/// # Errors
///
/// Returns [`IndexError::Decode`] when the payload is not a JSON array of
/// objects (an empty payload included).
pub fn try_parse_index(bytes: &[u8]) -> Result<Vec<DocumentRecord>, IndexError> {
    serde_json::from_slice(bytes).map_err(|e| IndexError::decode(bytes.len(), e))
}

/// Decodes an index payload into records, in payload order.
///
/// Decode failures are logged and produce an empty list, so callers see a
/// parse failure exactly like an index with no documents.
#[must_use]
pub fn parse_index(bytes: &[u8]) -> Vec<DocumentRecord> {
    match try_parse_index(bytes) {
        Ok(records) => {
            debug!(records = records.len(), "decoded document index");
            records
        }
        Err(error) => {
            warn!(error = %error, "could not decode document index; treating it as empty");
            Vec::new()
        }
    }
}
