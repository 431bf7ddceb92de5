//! # Data Loader Crate
//!
//! This crate fetches and decodes the candidate payload produced by the resume
//! parsing pipeline.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Candidate, Skills, Languages, CandidateSet)
//! - **parser**: Decode the JSON payload into Rust structs
//! - **source**: Read the payload from a local file or an http(s) URL
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{CandidateSet, CandidateSource};
//!
//! let source: CandidateSource = "data/candidates.json".parse()?;
//! let set = CandidateSet::load(&source).await?;
//!
//! for candidate in &set {
//!     println!("{} <{}>", candidate.name(), candidate.email().unwrap_or("N/A"));
//! }
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod source;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use parser::{parse_candidates, parse_candidates_value};
pub use source::CandidateSource;
pub use types::{
    // Type aliases
    CandidateId,
    // Core types
    Candidate,
    CandidateSet,
    Languages,
    Skills,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_set_creation() {
        let set = CandidateSet::new();
        assert_eq!(set.len(), 0);
        assert!(set.is_empty());
        assert!(set.get(0).is_none());
    }

    #[test]
    fn test_set_preserves_payload_order() {
        let set = parse_candidates(br#"[{"name": "B"}, {"name": "A"}, {"name": "C"}]"#).unwrap();
        let names: Vec<_> = set.iter().map(Candidate::name).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }
}
