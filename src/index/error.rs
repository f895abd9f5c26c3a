//! Error types for the index module.

use thiserror::Error;

/// Errors that can occur while fetching or decoding the document index.
///
/// These never abort a run; the fail-soft entry points log them and fall
/// back to an empty payload or an empty record list.
#[derive(Debug, Error)]
pub enum IndexError {
    /// The index request could not be completed.
    #[error("network error fetching index {url}: {source}")]
    Network {
        /// The index endpoint.
        url: String,
        /// The underlying network error.
        #[source]
        source: reqwest::Error,
    },

    /// The payload is not a JSON array of `{ "url": ... }` objects.
    #[error("failed to decode index payload ({bytes} bytes): {source}")]
    Decode {
        /// Size of the rejected payload.
        bytes: usize,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to build index HTTP client: {source}")]
    ClientBuild {
        /// The underlying builder error.
        #[source]
        source: reqwest::Error,
    },
}

impl IndexError {
    /// Creates a network error from a reqwest error.
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.into(),
            source,
        }
    }

    /// Creates a decode error for a payload of the given size.
    #[must_use]
    pub fn decode(bytes: usize, source: serde_json::Error) -> Self {
        Self::Decode { bytes, source }
    }
}
