//! CSV export of the current view.
//!
//! Every data cell is wrapped in double quotes with inner quotes doubled.
//! Commas are stripped from the experience summary rather than escaped, and
//! multi-value fields are joined with `"; "`.

use crate::detail::NOT_AVAILABLE;
use crate::error::{EngineError, Result};
use chrono::NaiveDate;
use data_loader::{Candidate, Languages};
use std::path::{Path, PathBuf};
use tracing::info;

pub const CSV_HEADERS: [&str; 7] = [
    "ID",
    "Name",
    "Email",
    "Upload Date",
    "Experience Summary",
    "Skills",
    "Languages",
];

const MULTI_VALUE_SEPARATOR: &str = "; ";

/// Unquoted cell values for one candidate, in header order
pub fn csv_row(candidate: &Candidate) -> [String; 7] {
    [
        candidate.id().to_string(),
        candidate.name().to_string(),
        candidate.email().unwrap_or(NOT_AVAILABLE).to_string(),
        candidate.upload_date().unwrap_or(NOT_AVAILABLE).to_string(),
        candidate.experience_summary().unwrap_or("").replace(',', ""),
        candidate.skills_joined(MULTI_VALUE_SEPARATOR),
        languages_cell(candidate),
    ]
}

/// A blank single-string value counts as missing; an empty list stays empty
fn languages_cell(candidate: &Candidate) -> String {
    match &candidate.languages {
        Some(Languages::Single(value)) if value.is_empty() => NOT_AVAILABLE.to_string(),
        Some(languages) => languages.joined(MULTI_VALUE_SEPARATOR),
        None => NOT_AVAILABLE.to_string(),
    }
}

fn quote(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

/// Full CSV payload: header line, then one `\n`-separated line per candidate
pub fn to_csv<'a>(candidates: impl IntoIterator<Item = &'a Candidate>) -> String {
    let rows: Vec<String> = candidates
        .into_iter()
        .map(|candidate| {
            csv_row(candidate)
                .iter()
                .map(|cell| quote(cell))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect();

    format!("{}\n{}", CSV_HEADERS.join(","), rows.join("\n"))
}

/// `candidates_<YYYY-MM-DD>.csv`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("candidates_{}.csv", date.format("%Y-%m-%d"))
}

/// Write `csv` into `dir` under the dated export name; returns the full path
pub fn write_csv(dir: &Path, date: NaiveDate, csv: &str) -> Result<PathBuf> {
    let path = dir.join(export_file_name(date));
    std::fs::write(&path, csv).map_err(|source| EngineError::Export {
        path: path.display().to_string(),
        source,
    })?;
    info!("Exported {} bytes to {}", csv.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::Skills;

    fn full_candidate() -> Candidate {
        Candidate {
            candidate_id: Some("17".to_string()),
            name: Some("Rohan \"Ro\" Gupta".to_string()),
            email: Some("rohan@example.com".to_string()),
            upload_date: Some("2024-05-01T08:00:00Z".to_string()),
            experience_summary: Some("Led, team, well".to_string()),
            skills: Some(Skills {
                technical: Some(vec!["C++".to_string(), "CUDA".to_string()]),
                non_technical: Some(vec!["Planning".to_string()]),
            }),
            languages: Some(Languages::List(vec![
                "English".to_string(),
                "Bengali".to_string(),
            ])),
            ..Default::default()
        }
    }

    #[test]
    fn test_header_only_for_empty_view() {
        let csv = to_csv(std::iter::empty());
        assert_eq!(csv, "ID,Name,Email,Upload Date,Experience Summary,Skills,Languages\n");
    }

    #[test]
    fn test_full_row() {
        let candidate = full_candidate();
        let csv = to_csv([&candidate]);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            "\"17\",\"Rohan \"\"Ro\"\" Gupta\",\"rohan@example.com\",\"2024-05-01T08:00:00Z\",\
             \"Led team well\",\"C++; CUDA; Planning\",\"English; Bengali\""
        );
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let candidate = Candidate {
            name: Some("Minimal".to_string()),
            ..Default::default()
        };
        assert_eq!(
            csv_row(&candidate),
            [
                "".to_string(),
                "Minimal".to_string(),
                "N/A".to_string(),
                "N/A".to_string(),
                "".to_string(),
                "".to_string(),
                "N/A".to_string(),
            ]
        );
    }

    #[test]
    fn test_single_string_languages_kept() {
        let candidate = Candidate {
            name: Some("Solo".to_string()),
            languages: Some(Languages::Single("English, Spanish".to_string())),
            ..Default::default()
        };
        assert_eq!(csv_row(&candidate)[6], "English, Spanish");
    }

    #[test]
    fn test_blank_languages() {
        let blank = Candidate {
            name: Some("Blank".to_string()),
            languages: Some(Languages::Single(String::new())),
            ..Default::default()
        };
        assert_eq!(csv_row(&blank)[6], "N/A");

        let empty_list = Candidate {
            name: Some("Empty".to_string()),
            languages: Some(Languages::List(Vec::new())),
            ..Default::default()
        };
        assert_eq!(csv_row(&empty_list)[6], "");
    }

    #[test]
    fn test_two_rows_strip_commas_in_summary() {
        let first = full_candidate();
        let second = Candidate {
            name: Some("Second".to_string()),
            experience_summary: Some("No commas here".to_string()),
            ..Default::default()
        };

        let csv = to_csv([&first, &second]);
        let lines: Vec<&str> = csv.split('\n').collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains(",\"Led team well\","));
        assert!(lines[2].contains(",\"No commas here\","));
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn test_export_file_name() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();
        assert_eq!(export_file_name(date), "candidates_2026-10-15.csv");
    }

    #[test]
    fn test_write_csv() {
        let dir = tempfile::tempdir().unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();

        let path = write_csv(dir.path(), date, "ID\n\"1\"").unwrap();
        assert_eq!(path.file_name().unwrap(), "candidates_2024-01-02.csv");
        assert_eq!(std::fs::read_to_string(path).unwrap(), "ID\n\"1\"");
    }

    #[test]
    fn test_write_csv_missing_dir() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let err = write_csv(Path::new("/no/such/dir/anywhere"), date, "x").unwrap_err();
        assert!(matches!(err, EngineError::Export { .. }));
    }
}
