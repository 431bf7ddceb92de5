//! Fetching the candidate payload.
//!
//! This is the only asynchronous step in a session: the payload is read once,
//! decoded into a [`CandidateSet`], and never re-fetched. There is no retry;
//! any failure here is returned to the caller as a fatal load error.

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::CandidateSet;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;
use tracing::{debug, info};

/// Where the candidate payload lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateSource {
    /// A JSON file on local disk
    File(PathBuf),
    /// A static JSON resource served over http(s)
    Url(String),
}

impl FromStr for CandidateSource {
    type Err = DataLoadError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DataLoadError::InvalidSource(
                "source must not be empty".to_string(),
            ));
        }
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Ok(CandidateSource::Url(trimmed.to_string()))
        } else {
            Ok(CandidateSource::File(PathBuf::from(trimmed)))
        }
    }
}

impl fmt::Display for CandidateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CandidateSource::File(path) => write!(f, "{}", path.display()),
            CandidateSource::Url(url) => write!(f, "{}", url),
        }
    }
}

impl CandidateSet {
    /// Load the authoritative set from a file or URL
    ///
    /// Steps:
    /// 1. Read the raw bytes (tokio file read, or an HTTP GET)
    /// 2. Reject non-2xx responses
    /// 3. Decode and validate the payload shape
    pub async fn load(source: &CandidateSource) -> Result<Self> {
        info!("Loading candidates from {}", source);
        let start = Instant::now();

        let payload = match source {
            CandidateSource::File(path) => {
                tokio::fs::read(path)
                    .await
                    .map_err(|source| DataLoadError::Io {
                        path: path.display().to_string(),
                        source,
                    })?
            }
            CandidateSource::Url(url) => fetch_url(url).await?,
        };
        debug!("Read {} bytes of candidate payload", payload.len());

        let set = parser::parse_candidates(&payload)?;
        info!(
            "Loaded {} candidate records in {:.2?}",
            set.len(),
            start.elapsed()
        );
        Ok(set)
    }
}

async fn fetch_url(url: &str) -> Result<Vec<u8>> {
    let url = cache_busted_url(url, chrono::Utc::now().timestamp_millis());
    debug!("GET {}", url);

    let response = reqwest::Client::new()
        .get(&url)
        .header(reqwest::header::CACHE_CONTROL, "no-cache")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(DataLoadError::HttpStatus {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("").to_string(),
        });
    }

    Ok(response.bytes().await?.to_vec())
}

/// Append a `t=<millis>` query parameter so intermediate caches are bypassed
fn cache_busted_url(url: &str, millis: i64) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}t={millis}")
}
