//! Core domain types for the candidate dashboard.
//!
//! The upstream resume parser writes loosely shaped JSON: every field may be
//! missing or `null`, ids may be strings or numbers, and `languages` is either
//! a list or a single string. The structs below make every optional field
//! explicit and resolve defaults in accessor methods, so the filter and sort
//! stages never deal with raw JSON.

use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================

/// Opaque candidate identifier, normalized to its string form
///
/// The payload may carry `"candidateId": 17` or `"candidateId": "c-17"`; both
/// compare by their textual representation.
pub type CandidateId = String;

// =============================================================================
// Candidate
// =============================================================================

/// One record of the authoritative set, exactly as the payload describes it.
///
/// Read-only to the engine. Accessors such as [`Candidate::name`] return the
/// defaulted view of a field; the raw `Option`s stay public for callers that
/// need to distinguish "absent" from "empty".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(
        default,
        deserialize_with = "deserialize_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub candidate_id: Option<CandidateId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Some resumes yield a bare number here; it is kept as its digits
    #[serde(
        default,
        deserialize_with = "deserialize_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Skills>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_summary: Option<String>,
    /// ISO-8601 timestamp, kept as the original string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Languages>,
}

/// Technical and non-technical skill lists; either may be absent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skills {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technical: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub non_technical: Option<Vec<String>>,
}

/// Spoken languages: the parser emits either a list or one free-text string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Languages {
    List(Vec<String>),
    Single(String),
}

impl Languages {
    /// Join a list with `separator`; a single string is returned as-is
    pub fn joined(&self, separator: &str) -> String {
        match self {
            Languages::List(items) => items.join(separator),
            Languages::Single(value) => value.clone(),
        }
    }
}

impl Candidate {
    /// Id as a string slice, empty when absent
    pub fn id(&self) -> &str {
        self.candidate_id.as_deref().unwrap_or("")
    }

    /// Display name, empty when absent
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// A record without a name is never shown in the table
    pub fn has_name(&self) -> bool {
        !self.name().is_empty()
    }

    /// Email, or `None` when absent or empty
    pub fn email(&self) -> Option<&str> {
        non_empty(self.email.as_deref())
    }

    pub fn phone_number(&self) -> Option<&str> {
        non_empty(self.phone_number.as_deref())
    }

    pub fn experience_summary(&self) -> Option<&str> {
        non_empty(self.experience_summary.as_deref())
    }

    pub fn upload_date(&self) -> Option<&str> {
        non_empty(self.upload_date.as_deref())
    }

    /// Technical skills followed by non-technical skills, in payload order
    pub fn all_skills(&self) -> impl Iterator<Item = &str> {
        let (technical, non_technical) = match &self.skills {
            Some(skills) => (
                skills.technical.as_deref().unwrap_or(&[]),
                skills.non_technical.as_deref().unwrap_or(&[]),
            ),
            None => (&[][..], &[][..]),
        };
        technical
            .iter()
            .chain(non_technical.iter())
            .map(String::as_str)
    }

    /// Combined skill list joined with `separator` (empty when there are none)
    pub fn skills_joined(&self, separator: &str) -> String {
        self.all_skills().collect::<Vec<_>>().join(separator)
    }

    /// Languages joined with `separator`, `None` when absent
    pub fn languages_joined(&self, separator: &str) -> Option<String> {
        self.languages.as_ref().map(|l| l.joined(separator))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Accepts a string or a number (`candidateId`, `phoneNumber`)
fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawText {
        Text(String),
        Number(serde_json::Number),
    }

    let raw = Option::<RawText>::deserialize(deserializer)?;
    Ok(raw.map(|value| match value {
        RawText::Text(text) => text,
        RawText::Number(number) => number.to_string(),
    }))
}

// =============================================================================
// CandidateSet - The Authoritative Set
// =============================================================================

/// The full candidate collection for one session.
///
/// Built once from the fetched payload and never mutated afterwards. Order is
/// the payload order; duplicates (including duplicate ids) are kept.
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    pub(crate) candidates: Vec<Candidate>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self {
            candidates: Vec::new(),
        }
    }

    pub fn from_candidates(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Record at a payload position
    pub fn get(&self, index: usize) -> Option<&Candidate> {
        self.candidates.get(index)
    }

    pub fn as_slice(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.candidates.iter()
    }

    /// First record whose id matches `id` by string form
    pub fn find_by_id(&self, id: &str) -> Option<&Candidate> {
        self.candidates
            .iter()
            .find(|c| c.candidate_id.as_deref() == Some(id))
    }
}

impl From<Vec<Candidate>> for CandidateSet {
    fn from(candidates: Vec<Candidate>) -> Self {
        Self::from_candidates(candidates)
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessor_defaults() {
        let candidate = Candidate::default();

        assert_eq!(candidate.id(), "");
        assert_eq!(candidate.name(), "");
        assert!(!candidate.has_name());
        assert!(candidate.email().is_none());
        assert_eq!(candidate.all_skills().count(), 0);
        assert_eq!(candidate.skills_joined(", "), "");
        assert!(candidate.languages_joined(", ").is_none());
    }

    #[test]
    fn test_all_skills_order() {
        let candidate = Candidate {
            skills: Some(Skills {
                technical: Some(vec!["Rust".to_string(), "SQL".to_string()]),
                non_technical: Some(vec!["Mentoring".to_string()]),
            }),
            ..Default::default()
        };

        let skills: Vec<_> = candidate.all_skills().collect();
        assert_eq!(skills, vec!["Rust", "SQL", "Mentoring"]);
        assert_eq!(candidate.skills_joined("; "), "Rust; SQL; Mentoring");
    }

    #[test]
    fn test_only_non_technical_skills() {
        let candidate = Candidate {
            skills: Some(Skills {
                technical: None,
                non_technical: Some(vec!["Negotiation".to_string()]),
            }),
            ..Default::default()
        };

        assert_eq!(candidate.skills_joined(", "), "Negotiation");
    }

    #[test]
    fn test_empty_email_is_none() {
        let candidate = Candidate {
            email: Some(String::new()),
            ..Default::default()
        };
        assert!(candidate.email().is_none());
    }

    #[test]
    fn test_languages_joined() {
        let list = Languages::List(vec!["English".to_string(), "Hindi".to_string()]);
        assert_eq!(list.joined(", "), "English, Hindi");

        let single = Languages::Single("English and French".to_string());
        assert_eq!(single.joined(", "), "English and French");
    }

    #[test]
    fn test_find_by_id_returns_first_duplicate() {
        let set = CandidateSet::from_candidates(vec![
            Candidate {
                candidate_id: Some("7".to_string()),
                name: Some("First".to_string()),
                ..Default::default()
            },
            Candidate {
                candidate_id: Some("7".to_string()),
                name: Some("Second".to_string()),
                ..Default::default()
            },
        ]);

        assert_eq!(set.len(), 2);
        assert_eq!(set.find_by_id("7").map(Candidate::name), Some("First"));
        assert!(set.find_by_id("8").is_none());
    }
}
