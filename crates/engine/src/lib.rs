//! Engine crate for the candidate dashboard.
//!
//! This crate contains the candidate table that coordinates the filter, sort
//! and pagination stages, plus the derived outputs a front end renders:
//! stats cards, the detail modal and the CSV export.

pub mod config;
pub mod detail;
pub mod error;
pub mod export;
pub mod pagination;
pub mod stats;
pub mod table;

pub use config::{DEFAULT_PAGE_SIZE, EngineConfig};
pub use detail::{CandidateDetail, format_upload_date};
pub use error::{EngineError, Result};
pub use pagination::PaginationCursor;
pub use stats::{DashboardStats, showing_caption};
pub use table::{CandidateTable, TablePage};

// Front ends only need to depend on this crate
pub use data_loader::{Candidate, CandidateSource};
pub use pipeline::{SortColumn, SortCursor, SortDirection};
