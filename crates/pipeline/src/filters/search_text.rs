//! Free-text search over name, email and skills.

use crate::query::{FilterQuery, contains_lowercase};
use crate::traits::Filter;
use data_loader::Candidate;

/// Keeps candidates whose name, email or any skill contains the search term.
///
/// ## Algorithm
/// 1. Empty search term: keep everything
/// 2. Otherwise keep if the term is a case-insensitive substring of the name,
///    of the email (when present), or of any technical/non-technical skill
pub struct SearchTextFilter;

impl Filter for SearchTextFilter {
    fn name(&self) -> &str {
        "SearchTextFilter"
    }

    fn matches(&self, candidate: &Candidate, query: &FilterQuery) -> bool {
        let term = query.search();
        if term.is_empty() {
            return true;
        }

        contains_lowercase(candidate.name(), term)
            || candidate
                .email()
                .is_some_and(|email| contains_lowercase(email, term))
            || candidate
                .all_skills()
                .any(|skill| contains_lowercase(skill, term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::Skills;

    fn candidate() -> Candidate {
        Candidate {
            name: Some("Karthik Menon".to_string()),
            email: Some("karthik@Example.com".to_string()),
            skills: Some(Skills {
                technical: Some(vec!["Kubernetes".to_string()]),
                non_technical: Some(vec!["Public Speaking".to_string()]),
            }),
            experience_summary: Some("Ran the platform team".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_matches_each_searchable_field() {
        let filter = SearchTextFilter;
        let candidate = candidate();

        assert!(filter.matches(&candidate, &FilterQuery::new("MENON", "")));
        assert!(filter.matches(&candidate, &FilterQuery::new("example.COM", "")));
        assert!(filter.matches(&candidate, &FilterQuery::new("kube", "")));
        assert!(filter.matches(&candidate, &FilterQuery::new("speaking", "")));
    }

    #[test]
    fn test_experience_summary_not_searched() {
        let filter = SearchTextFilter;
        assert!(!filter.matches(&candidate(), &FilterQuery::new("platform", "")));
    }

    #[test]
    fn test_empty_term_matches_all() {
        let filter = SearchTextFilter;
        assert!(filter.matches(&Candidate::default(), &FilterQuery::new("", "rust")));
    }
}
