//! Filter to drop records that have no display name.
//!
//! This is the first filter in the dashboard pipeline: a nameless record is
//! treated as an ingestion artifact and never rendered, whatever the query.

use crate::query::FilterQuery;
use crate::traits::Filter;
use data_loader::Candidate;

/// Keeps only candidates with a non-empty `name`.
pub struct HasNameFilter;

impl Filter for HasNameFilter {
    fn name(&self) -> &str {
        "HasNameFilter"
    }

    fn matches(&self, candidate: &Candidate, _query: &FilterQuery) -> bool {
        candidate.has_name()
    }
}
