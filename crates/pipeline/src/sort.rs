//! Column sorting for the candidate table.
//!
//! Sorting reorders the current view (already filtered), never the full set.
//! A record whose key is empty always lands after every non-empty key, in
//! both directions; only the non-empty keys are affected by the direction.

use data_loader::Candidate;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// A table column header.
///
/// `Status` is rendered by the dashboard but is not sortable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortColumn {
    Name,
    Email,
    Skills,
    ExperienceSummary,
    UploadDate,
    Status,
}

impl SortColumn {
    /// Columns in header order (after the selection checkbox)
    pub const ALL: [SortColumn; 6] = [
        SortColumn::Name,
        SortColumn::Email,
        SortColumn::Skills,
        SortColumn::ExperienceSummary,
        SortColumn::UploadDate,
        SortColumn::Status,
    ];

    /// Column for a 1-based header position, as the table emits on click
    ///
    /// # Returns
    /// `None` for 0 or a position past the last header
    pub fn from_header_index(index: usize) -> Option<Self> {
        index.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn is_sortable(self) -> bool {
        self != SortColumn::Status
    }

    /// Field name as it appears in the payload
    pub fn as_str(self) -> &'static str {
        match self {
            SortColumn::Name => "name",
            SortColumn::Email => "email",
            SortColumn::Skills => "skills",
            SortColumn::ExperienceSummary => "experienceSummary",
            SortColumn::UploadDate => "uploadDate",
            SortColumn::Status => "status",
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown column '{0}' (expected name, email, skills, experienceSummary, uploadDate or status)")]
pub struct ParseSortColumnError(pub String);

impl FromStr for SortColumn {
    type Err = ParseSortColumnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(SortColumn::Name),
            "email" => Ok(SortColumn::Email),
            "skills" => Ok(SortColumn::Skills),
            "experiencesummary" | "experience_summary" | "experience" => {
                Ok(SortColumn::ExperienceSummary)
            }
            "uploaddate" | "upload_date" | "date" => Ok(SortColumn::UploadDate),
            "status" => Ok(SortColumn::Status),
            _ => Err(ParseSortColumnError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => f.write_str("asc"),
            SortDirection::Descending => f.write_str("desc"),
        }
    }
}

/// Current sort column and direction; `column` is `None` until the first click
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortCursor {
    pub column: Option<SortColumn>,
    pub direction: SortDirection,
}

impl SortCursor {
    /// Register a header click.
    ///
    /// Clicking the active column flips the direction; any other column
    /// becomes active in ascending order. Returns the new direction.
    pub fn select(&mut self, column: SortColumn) -> SortDirection {
        if self.column == Some(column) {
            self.direction = self.direction.toggled();
        } else {
            self.column = Some(column);
            self.direction = SortDirection::Ascending;
        }
        self.direction
    }
}

/// Comparison key for a candidate in a column.
///
/// Skills are technical then non-technical, joined with `", "`. Every column
/// except `UploadDate` is lowercased; upload dates compare as stored, which
/// is chronological for well-formed ISO-8601 strings.
pub fn sort_key(candidate: &Candidate, column: SortColumn) -> String {
    match column {
        SortColumn::Name => candidate.name().to_lowercase(),
        SortColumn::Email => candidate.email().unwrap_or("").to_lowercase(),
        SortColumn::Skills => candidate.skills_joined(", ").to_lowercase(),
        SortColumn::ExperienceSummary => candidate
            .experience_summary()
            .unwrap_or("")
            .to_lowercase(),
        SortColumn::UploadDate => candidate.upload_date().unwrap_or("").to_string(),
        SortColumn::Status => String::new(),
    }
}

/// Order two keys; empty keys go last regardless of `direction`
pub fn compare_keys(a: &str, b: &str, direction: SortDirection) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => match direction {
            SortDirection::Ascending => a.cmp(b),
            SortDirection::Descending => b.cmp(a),
        },
    }
}

/// Reorder `view` (positions into `candidates`) by `column`.
///
/// Keys are extracted once per record before sorting. The sort is stable,
/// so records with equal keys keep their relative order.
///
/// # Arguments
/// * `view` - Positions to reorder in place
/// * `candidates` - The slice `view` points into
/// * `column` - Column whose [`sort_key`] orders the rows
/// * `direction` - Applies to non-empty keys only
pub fn sort_view(
    view: &mut [usize],
    candidates: &[Candidate],
    column: SortColumn,
    direction: SortDirection,
) {
    let mut keyed: Vec<(String, usize)> = view
        .iter()
        .map(|&index| (sort_key(&candidates[index], column), index))
        .collect();

    keyed.sort_by(|a, b| compare_keys(&a.0, &b.0, direction));

    for (slot, (_, index)) in view.iter_mut().zip(keyed) {
        *slot = index;
    }

    debug!("Sorted {} rows by {} {}", view.len(), column, direction);
}
