//! HTTP client wrapper for fetching PDF documents.
//!
//! This module provides the `HttpClient` struct which performs a single
//! validated GET per document and buffers the whole body in memory, so
//! nothing touches the disk until the payload is known to be complete and
//! non-empty.

use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument};
use url::Url;

use super::constants::PDF_CONTENT_TYPE;
use super::error::DownloadError;
use crate::config::DEFAULT_DOWNLOAD_TIMEOUT_SECS;
use crate::user_agent;

/// HTTP client for fetching PDF documents.
///
/// Created once per run and reused for every document, taking advantage
/// of connection pooling.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a client with the default 30 second total request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`DownloadError::ClientBuild`] if the HTTP client cannot be built.
    pub fn new() -> Result<Self, DownloadError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_DOWNLOAD_TIMEOUT_SECS))
    }

    /// Creates a client with an explicit total request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`DownloadError::ClientBuild`] if the HTTP client cannot be built.
    pub fn with_timeout(timeout: Duration) -> Result<Self, DownloadError> {
        let client = Client::builder()
            .timeout(timeout)
            .gzip(true)
            .user_agent(user_agent::default_download_user_agent())
            .build()
            .map_err(|source| DownloadError::ClientBuild { source })?;
        Ok(Self { client })
    }

    /// Fetches a PDF and returns its complete body.
    ///
    /// The response must be `200 OK` with a `Content-Type` containing
    /// `application/pdf`, and the body must be non-empty.
    ///
    /// # Errors
    ///
    /// Returns `DownloadError` if:
    /// - The URL is invalid
    /// - The request fails (network error, timeout)
    /// - The status is anything other than 200
    /// - The content type is not PDF
    /// - Reading the body fails or yields zero bytes
    #[instrument(skip(self), fields(url = %url))]
    pub async fn fetch_pdf(&self, url: &str) -> Result<Vec<u8>, DownloadError> {
        Url::parse(url).map_err(|_| DownloadError::invalid_url(url))?;

        debug!("sending request");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DownloadError::network(url, e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(DownloadError::http_status(url, status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        if !is_pdf_content_type(&content_type) {
            return Err(DownloadError::content_type(url, content_type));
        }

        let body = read_body(response, url).await?;
        if body.is_empty() {
            return Err(DownloadError::empty_body(url));
        }

        debug!(bytes = body.len(), "response body buffered");
        Ok(body)
    }
}

/// Returns true if a `Content-Type` value declares a PDF.
fn is_pdf_content_type(content_type: &str) -> bool {
    content_type.to_ascii_lowercase().contains(PDF_CONTENT_TYPE)
}

/// Reads the whole response body into memory.
async fn read_body(response: reqwest::Response, url: &str) -> Result<Vec<u8>, DownloadError> {
    let capacity = response
        .content_length()
        .and_then(|len| usize::try_from(len).ok())
        .unwrap_or(0);
    let mut body = Vec::with_capacity(capacity);
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| DownloadError::network(url, e))?;
        body.extend_from_slice(&chunk);
    }

    Ok(body)
}
