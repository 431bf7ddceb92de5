//! Filter implementations for the candidate table.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod has_name;
pub mod search_text;
pub mod skill;

// Re-export for convenience
pub use has_name::HasNameFilter;
pub use search_text::SearchTextFilter;
pub use skill::SkillFilter;
