//! Error types for the data-loader crate.
//!
//! Every variant here is a load failure: the dashboard cannot show a partial
//! table, so callers treat any of them as fatal for the session.

use thiserror::Error;

/// Errors that can occur while fetching and decoding the candidate payload
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// Local payload file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Request never produced a response (DNS, TLS, connection reset, ...)
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Server answered, but not with a 2xx status
    #[error("Network response was not ok: {status} {reason}")]
    HttpStatus { status: u16, reason: String },

    /// Payload is not valid JSON
    #[error("Payload is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Payload decoded, but the top-level value is not an array
    #[error("Fetched data is not a valid JSON array (found {found})")]
    NotAnArray { found: &'static str },

    /// The source string is neither a readable path nor an http(s) URL
    #[error("Invalid candidate source: {0}")]
    InvalidSource(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
