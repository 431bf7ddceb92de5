//! Candidate detail view (the "view resume" modal).

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use data_loader::Candidate;
use serde::Serialize;

/// Placeholder for a missing field
pub const NOT_AVAILABLE: &str = "N/A";

/// Everything the detail modal shows, with defaults already applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateDetail {
    pub candidate_id: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    /// Human-readable upload date, see [`format_upload_date`]
    pub upload_date: String,
    pub experience_summary: String,
    pub skills: Vec<String>,
    pub languages: String,
}

impl CandidateDetail {
    pub fn from_candidate(candidate: &Candidate) -> Self {
        Self {
            candidate_id: candidate.id().to_string(),
            name: candidate.name().to_string(),
            email: or_na(candidate.email()),
            phone_number: or_na(candidate.phone_number()),
            upload_date: format_upload_date(candidate.upload_date()),
            experience_summary: or_na(candidate.experience_summary()),
            skills: candidate.all_skills().map(str::to_string).collect(),
            languages: candidate
                .languages_joined(", ")
                .filter(|l| !l.is_empty())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        }
    }

    /// Skills as one line, or "No skills listed."
    pub fn skills_display(&self) -> String {
        if self.skills.is_empty() {
            "No skills listed.".to_string()
        } else {
            self.skills.join(", ")
        }
    }
}

fn or_na(value: Option<&str>) -> String {
    value.unwrap_or(NOT_AVAILABLE).to_string()
}

/// Format an ISO-8601 upload date as `Mon D, YYYY`.
///
/// - absent or empty: `N/A`
/// - RFC 3339 with offset: the calendar date in UTC
/// - naive `YYYY-MM-DDTHH:MM:SS[.fff]` or `YYYY-MM-DD`: taken as written
/// - anything else: `Invalid Date`
pub fn format_upload_date(value: Option<&str>) -> String {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return NOT_AVAILABLE.to_string();
    };

    match parse_upload_date(raw) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => "Invalid Date".to_string(),
    }
}

fn parse_upload_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.naive_utc().date());
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(timestamp.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::{Languages, Skills};

    #[test]
    fn test_format_upload_date() {
        assert_eq!(format_upload_date(None), "N/A");
        assert_eq!(format_upload_date(Some("")), "N/A");
        assert_eq!(format_upload_date(Some("2024-03-05T10:15:00Z")), "Mar 5, 2024");
        assert_eq!(format_upload_date(Some("2024-12-31T23:30:00.123456")), "Dec 31, 2024");
        assert_eq!(format_upload_date(Some("2026-10-15")), "Oct 15, 2026");
        assert_eq!(format_upload_date(Some("yesterday")), "Invalid Date");
    }

    #[test]
    fn test_offset_dates_use_utc() {
        // 01:00 at +05:30 is still the previous day in UTC
        assert_eq!(
            format_upload_date(Some("2024-07-01T01:00:00+05:30")),
            "Jun 30, 2024"
        );
    }

    #[test]
    fn test_detail_defaults() {
        let detail = CandidateDetail::from_candidate(&Candidate {
            candidate_id: Some("c-9".to_string()),
            name: Some("Nisha".to_string()),
            ..Default::default()
        });

        assert_eq!(detail.candidate_id, "c-9");
        assert_eq!(detail.email, "N/A");
        assert_eq!(detail.phone_number, "N/A");
        assert_eq!(detail.upload_date, "N/A");
        assert_eq!(detail.experience_summary, "N/A");
        assert_eq!(detail.languages, "N/A");
        assert_eq!(detail.skills_display(), "No skills listed.");
    }

    #[test]
    fn test_detail_full_record() {
        let detail = CandidateDetail::from_candidate(&Candidate {
            candidate_id: Some("c-1".to_string()),
            name: Some("Nisha".to_string()),
            email: Some("nisha@example.com".to_string()),
            phone_number: Some("555-0100".to_string()),
            skills: Some(Skills {
                technical: Some(vec!["Terraform".to_string()]),
                non_technical: Some(vec!["Coaching".to_string()]),
            }),
            experience_summary: Some("Six years in SRE".to_string()),
            upload_date: Some("2025-01-20T09:00:00Z".to_string()),
            languages: Some(Languages::List(vec![
                "English".to_string(),
                "Tamil".to_string(),
            ])),
        });

        assert_eq!(detail.email, "nisha@example.com");
        assert_eq!(detail.upload_date, "Jan 20, 2025");
        assert_eq!(detail.skills_display(), "Terraform, Coaching");
        assert_eq!(detail.languages, "English, Tamil");
    }
}
