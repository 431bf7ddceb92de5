//! The user's current search input, normalized once per filter pass.

/// Free-text search plus skill selector.
///
/// Both terms are lowercased on construction. An empty term matches every
/// candidate for its predicate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery {
    search: String,
    skill: String,
}

impl FilterQuery {
    pub fn new(search: impl AsRef<str>, skill: impl AsRef<str>) -> Self {
        Self {
            search: search.as_ref().to_lowercase(),
            skill: skill.as_ref().to_lowercase(),
        }
    }

    /// Lowercased search term
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Lowercased skill selector
    pub fn skill(&self) -> &str {
        &self.skill
    }
}

/// Case-insensitive substring test; `needle` must already be lowercase
pub(crate) fn contains_lowercase(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
