//! Remote document index retrieval and decoding.
//!
//! The index is a JSON array of objects carrying a `url` field. Both stages
//! fail soft: a transport failure yields an empty payload and a decode
//! failure yields no records, so the pipeline continues with nothing to do.

mod error;
mod fetcher;
mod record;

pub use error::IndexError;
pub use fetcher::IndexFetcher;
pub use record::{DocumentRecord, parse_index, try_parse_index};
