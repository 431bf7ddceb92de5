//! Filter for the skill selector dropdown.

use crate::query::{FilterQuery, contains_lowercase};
use crate::traits::Filter;
use data_loader::Candidate;

/// Keeps candidates with at least one skill containing the selected skill.
///
/// Matching is a case-insensitive substring test, so selecting "java" also
/// keeps "JavaScript".
pub struct SkillFilter;

impl Filter for SkillFilter {
    fn name(&self) -> &str {
        "SkillFilter"
    }

    fn matches(&self, candidate: &Candidate, query: &FilterQuery) -> bool {
        let selected = query.skill();
        selected.is_empty()
            || candidate
                .all_skills()
                .any(|skill| contains_lowercase(skill, selected))
    }
}
