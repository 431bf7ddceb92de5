//! Dashboard summary cards.
//!
//! Computed from the full authoritative set, never from the filtered view,
//! so the cards do not move while the user searches.

use data_loader::Candidate;
use rayon::prelude::*;
use serde::Serialize;

/// Marker the upstream parser puts in `name` when a resume failed to parse
const ERROR_MARKER: &str = "error";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Every record in the payload, named or not
    pub total_uploads: usize,
    /// `round(total_candidates / total_uploads * 100)`, 0 for an empty set
    pub success_rate: u32,
    /// Records whose name contains "error" (any case)
    pub total_errors: usize,
    /// `total_uploads - total_errors`
    pub total_candidates: usize,
}

impl DashboardStats {
    pub fn compute(candidates: &[Candidate]) -> Self {
        let total_uploads = candidates.len();
        let total_errors = candidates
            .par_iter()
            .filter(|candidate| is_ingestion_error(candidate))
            .count();
        let total_candidates = total_uploads - total_errors;

        let success_rate = if total_uploads > 0 {
            (total_candidates as f64 / total_uploads as f64 * 100.0).round() as u32
        } else {
            0
        };

        Self {
            total_uploads,
            success_rate,
            total_errors,
            total_candidates,
        }
    }
}

fn is_ingestion_error(candidate: &Candidate) -> bool {
    candidate.name().to_lowercase().contains(ERROR_MARKER)
}

/// Caption above the table, e.g. "Showing 1 candidate" / "Showing 7 candidates"
pub fn showing_caption(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("Showing {count} candidate{plural}")
}
