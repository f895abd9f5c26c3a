//! HTTP retrieval of the raw index payload.

use std::time::Duration;

use futures_util::StreamExt;
use reqwest::Client;
use tracing::{debug, info, instrument, warn};

use super::IndexError;
use crate::user_agent;

/// Fetches the raw document index.
///
/// No request timeout is applied unless one is configured, matching the
/// default transport behavior for the single index request of a run.
#[derive(Debug, Clone)]
pub struct IndexFetcher {
    client: Client,
}

impl IndexFetcher {
    /// Creates a fetcher with an optional total request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::ClientBuild`] if the HTTP client cannot be built.
    pub fn new(timeout: Option<Duration>) -> Result<Self, IndexError> {
        let mut builder = Client::builder()
            .gzip(true)
            .user_agent(user_agent::default_index_user_agent());
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|source| IndexError::ClientBuild { source })?;
        Ok(Self { client })
    }

    /// Performs one GET against `endpoint` and returns the response body.
    ///
    /// Never fails: a request error is logged and yields an empty payload,
    /// and a body read error is logged and yields the bytes received so far.
    /// A non-success status is logged but its body is still returned.
    #[instrument(skip(self), fields(endpoint = %endpoint))]
    pub async fn fetch(&self, endpoint: &str) -> Vec<u8> {
        info!("fetching document index");

        let response = match self.client.get(endpoint).send().await {
            Ok(response) => response,
            Err(source) => {
                let error = IndexError::network(endpoint, source);
                warn!(error = %error, "index request failed; continuing with an empty index");
                return Vec::new();
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "index endpoint returned a non-success status");
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            match chunk {
                Ok(chunk) => body.extend_from_slice(&chunk),
                Err(source) => {
                    let error = IndexError::network(endpoint, source);
                    warn!(error = %error, bytes = body.len(), "index body read interrupted");
                    break;
                }
            }
        }

        debug!(bytes = body.len(), "index payload received");
        body
    }
}
