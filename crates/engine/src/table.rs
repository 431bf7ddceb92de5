//! # Candidate Table
//!
//! The state store behind the dashboard. It owns the authoritative set and
//! every piece of mutable UI state derived from it:
//! 1. Filter: rescan the set with the current query, reset to page 1
//! 2. Sort: reorder the current view by a column, reset to page 1
//! 3. Paginate: move within `[1, total_pages]`
//!
//! Stats, the page slice, and the prev/next flags are computed on demand from
//! this state, so a front end can re-render everything after any command and
//! always see a consistent picture.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, info};

use data_loader::{Candidate, CandidateSet, CandidateSource};
use pipeline::{FilterPipeline, FilterQuery, SortColumn, SortCursor, SortDirection, sort_view};

use crate::config::EngineConfig;
use crate::detail::CandidateDetail;
use crate::error::Result;
use crate::export;
use crate::pagination::PaginationCursor;
use crate::stats::{DashboardStats, showing_caption};

/// One rendered page of the table plus its navigation state
#[derive(Debug, Clone)]
pub struct TablePage<'a> {
    pub rows: Vec<&'a Candidate>,
    pub current_page: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
    /// Length of the whole filtered view, not just this page
    pub visible_count: usize,
}

impl TablePage<'_> {
    /// No candidate matches the current filters
    pub fn is_empty_result(&self) -> bool {
        self.visible_count == 0
    }

    pub fn caption(&self) -> String {
        showing_caption(self.visible_count)
    }
}

/// Searchable, sortable, paginated view over one session's candidates
pub struct CandidateTable {
    candidates: CandidateSet,
    pipeline: FilterPipeline,
    /// Positions into `candidates`, in display order
    view: Vec<usize>,
    sort: SortCursor,
    pagination: PaginationCursor,
}

impl CandidateTable {
    /// Build a table over an already-loaded set.
    ///
    /// The initial view is the whole set in payload order, with no filtering
    /// applied, as it is before the user first types a query.
    pub fn new(candidates: CandidateSet, config: &EngineConfig) -> Result<Self> {
        config.validate()?;

        let view = (0..candidates.len()).collect();
        info!(
            "Candidate table ready: {} records, page size {}",
            candidates.len(),
            config.page_size
        );

        Ok(Self {
            candidates,
            pipeline: FilterPipeline::dashboard(),
            view,
            sort: SortCursor::default(),
            pagination: PaginationCursor::new(config.page_size),
        })
    }

    /// Fetch the payload and build the table; any load error is fatal
    ///
    /// # Arguments
    /// * `source` - Local file or http(s) URL of the JSON array
    /// * `config` - Page size and other table settings
    ///
    /// # Returns
    /// * `Ok(CandidateTable)` - Table showing page 1 of the full set
    /// * `Err(EngineError::InvalidConfig)` - Bad config, before any fetch
    /// * `Err(EngineError::Load)` - The payload could not be loaded
    pub async fn load(source: &CandidateSource, config: &EngineConfig) -> Result<Self> {
        // Fail on a bad config before paying for the fetch
        config.validate()?;
        let candidates = CandidateSet::load(source).await?;
        Self::new(candidates, config)
    }

    /// Build from raw payload bytes (already fetched by the caller)
    pub fn from_payload(payload: &[u8], config: &EngineConfig) -> Result<Self> {
        let candidates = data_loader::parse_candidates(payload)?;
        Self::new(candidates, config)
    }

    /// The authoritative set
    pub fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    // ---------------------------------------------------------------------
    // Filter stage
    // ---------------------------------------------------------------------

    /// Recompute the view from the full set and return its new length.
    ///
    /// The sort cursor is kept, so the next click on the same column still
    /// toggles, but the new view is in payload order until sorted again.
    ///
    /// # Arguments
    /// * `search_text` - Search box contents; matched against name, email
    ///   and skills
    /// * `skill_selector` - Selected skill; matched against skills only
    ///
    /// # Returns
    /// Number of candidates in the new view
    pub fn apply_filter(&mut self, search_text: &str, skill_selector: &str) -> usize {
        let query = FilterQuery::new(search_text, skill_selector);
        self.view = self.pipeline.apply(self.candidates.as_slice(), &query);
        self.pagination.reset();

        debug!(
            "Filter search={:?} skill={:?} -> {} of {} candidates",
            query.search(),
            query.skill(),
            self.view.len(),
            self.candidates.len()
        );
        self.view.len()
    }

    pub fn clear_filters(&mut self) -> usize {
        self.apply_filter("", "")
    }

    // ---------------------------------------------------------------------
    // Sort stage
    // ---------------------------------------------------------------------

    /// Handle a header click on `column`.
    ///
    /// ## Algorithm
    /// 1. Ignore columns that are not sortable
    /// 2. Toggle the direction if `column` is already active, otherwise
    ///    switch to it ascending
    /// 3. Reorder the current view (not the full set)
    /// 4. Go back to page 1
    ///
    /// # Returns
    /// * `Some(direction)` - The direction now in effect
    /// * `None` - `column` is not sortable; nothing changed
    pub fn sort(&mut self, column: SortColumn) -> Option<SortDirection> {
        if !column.is_sortable() {
            debug!("Ignoring sort request on {}", column);
            return None;
        }

        let direction = self.sort.select(column);
        sort_view(&mut self.view, self.candidates.as_slice(), column, direction);
        self.pagination.reset();
        Some(direction)
    }

    pub fn sort_cursor(&self) -> SortCursor {
        self.sort
    }

    // ---------------------------------------------------------------------
    // Pagination stage
    // ---------------------------------------------------------------------

    /// Move by `delta` pages.
    ///
    /// # Arguments
    /// * `delta` - Pages to move; negative goes back
    ///
    /// # Returns
    /// `true` if the page changed. A move that would leave
    /// `[1, total_pages]` is ignored and returns `false`.
    pub fn change_page(&mut self, delta: isize) -> bool {
        self.pagination.change_page(delta, self.view.len())
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current_page()
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages(self.view.len())
    }

    pub fn page_size(&self) -> usize {
        self.pagination.page_size()
    }

    pub fn has_previous(&self) -> bool {
        self.pagination.has_previous()
    }

    pub fn has_next(&self) -> bool {
        self.pagination.has_next(self.view.len())
    }

    /// Candidates on the current page, in display order
    pub fn current_page_slice(&self) -> Vec<&Candidate> {
        self.view[self.pagination.page_range(self.view.len())]
            .iter()
            .map(|&index| &self.candidates.as_slice()[index])
            .collect()
    }

    /// Snapshot of everything needed to render the table body and controls
    pub fn page(&self) -> TablePage<'_> {
        TablePage {
            rows: self.current_page_slice(),
            current_page: self.current_page(),
            total_pages: self.total_pages(),
            has_previous: self.has_previous(),
            has_next: self.has_next(),
            visible_count: self.view.len(),
        }
    }

    // ---------------------------------------------------------------------
    // Derived views
    // ---------------------------------------------------------------------

    /// The whole filtered (and possibly sorted) view, ignoring pagination
    pub fn view(&self) -> impl Iterator<Item = &Candidate> + '_ {
        self.view
            .iter()
            .map(move |&index| &self.candidates.as_slice()[index])
    }

    pub fn view_len(&self) -> usize {
        self.view.len()
    }

    /// Summary cards, computed over the full set
    pub fn stats(&self) -> DashboardStats {
        DashboardStats::compute(self.candidates.as_slice())
    }

    /// Detail modal for a candidate id, looked up in the full set
    pub fn detail(&self, candidate_id: &str) -> Option<CandidateDetail> {
        self.candidates
            .find_by_id(candidate_id)
            .map(CandidateDetail::from_candidate)
    }

    /// CSV for the current view (all pages)
    pub fn export_csv(&self) -> String {
        export::to_csv(self.view())
    }

    /// Write the current view's CSV into `dir`, named after `date`
    pub fn export_to_dir(&self, dir: &Path, date: NaiveDate) -> Result<PathBuf> {
        info!("Exporting {} candidates", self.view.len());
        export::write_csv(dir, date, &self.export_csv())
    }
}
