//! Filter and sort stages for the candidate table.
//!
//! This crate provides:
//! - Filter trait and implementations for candidate filtering
//! - FilterPipeline for composing filters
//! - Column sorting with the empty-key-last rule
//!
//! ## Architecture
//! Both stages work on a *view*: a list of positions into the authoritative
//! candidate slice. That keeps the view a subset of the set by construction.
//! 1. The pipeline rescans the full set and yields the positions that match
//! 2. Sorting reorders those positions in place
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterPipeline, FilterQuery, SortColumn, SortDirection, sort_view};
//!
//! let pipeline = FilterPipeline::dashboard();
//! let mut view = pipeline.apply(set.as_slice(), &FilterQuery::new("", "python"));
//! sort_view(&mut view, set.as_slice(), SortColumn::Name, SortDirection::Ascending);
//! ```

pub mod traits;
pub mod query;
pub mod filters;
pub mod filter_pipeline;
pub mod sort;

// Re-export main types
pub use traits::Filter;
pub use query::FilterQuery;
pub use filter_pipeline::FilterPipeline;
pub use sort::{
    ParseSortColumnError, SortColumn, SortCursor, SortDirection, compare_keys, sort_key, sort_view,
};
