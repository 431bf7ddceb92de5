//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::filters::{HasNameFilter, SearchTextFilter, SkillFilter};
use crate::query::FilterQuery;
use crate::traits::Filter;
use data_loader::Candidate;
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// A candidate is kept only if every filter matches it (logical AND).
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(HasNameFilter)
///     .add_filter(SearchTextFilter)
///     .add_filter(SkillFilter);
///
/// let view = pipeline.apply(set.as_slice(), &FilterQuery::new("rust", ""));
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The dashboard's standard composition: named records matching both the
    /// search text and the skill selector.
    pub fn dashboard() -> Self {
        Self::new()
            .add_filter(HasNameFilter)
            .add_filter(SearchTextFilter)
            .add_filter(SkillFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    ///
    /// # Arguments
    /// * `filter` - Any type implementing the Filter trait
    ///
    /// # Returns
    /// Self for method chaining
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Number of filters in the pipeline
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence to the full candidate slice.
    ///
    /// ## Algorithm
    /// 1. Start with every position in `candidates`
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Retain the positions the filter matches
    ///    c. Log output count
    /// 3. Return the surviving positions
    ///
    /// Every call rescans the whole slice; there is no incremental state
    /// between calls.
    ///
    /// # Arguments
    /// * `candidates` - The authoritative set
    /// * `query` - Normalized search text and skill selector
    ///
    /// # Returns
    /// Positions into `candidates` of the survivors, in their original order
    pub fn apply(&self, candidates: &[Candidate], query: &FilterQuery) -> Vec<usize> {
        let mut current: Vec<usize> = (0..candidates.len()).collect();
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current.retain(|&index| filter.matches(&candidates[index], query));
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
