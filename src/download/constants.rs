//! Constants for the download module (content validation, temp files).

/// Substring the `Content-Type` header must contain for a response to be persisted.
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Suffix of the sibling temporary file a download is written to before being published.
pub const PARTIAL_FILE_SUFFIX: &str = ".part";
