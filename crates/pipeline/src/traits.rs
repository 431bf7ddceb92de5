//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible predicates to be applied to the candidate set.

use crate::query::FilterQuery;
use data_loader::Candidate;

/// Core trait for filtering candidates.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows a pipeline to be shared across threads
/// - Filters are pure predicates: they cannot fail, since every optional
///   candidate field has a defaulted accessor
/// - The query arrives already lowercased, so filters only lowercase the
///   candidate side
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `candidate` survives this filter for the given query
    fn matches(&self, candidate: &Candidate, query: &FilterQuery) -> bool;
}
