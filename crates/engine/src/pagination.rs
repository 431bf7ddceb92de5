//! Pagination over the current view.
//!
//! The cursor only stores the page size and the 1-based current page. The
//! page count and the prev/next flags are derived from the view length on
//! every call, so they can never drift from the view.

use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationCursor {
    page_size: usize,
    current_page: usize,
}

impl PaginationCursor {
    /// `page_size` of 0 is treated as 1; configs are validated before this
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Back to page 1 (after any filter or sort)
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// `max(1, ceil(len / page_size))`: an empty view still has one page
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size).max(1)
    }

    /// View positions covered by the current page, clamped to `len`
    pub fn page_range(&self, len: usize) -> Range<usize> {
        let start = ((self.current_page - 1) * self.page_size).min(len);
        let end = (start + self.page_size).min(len);
        start..end
    }

    /// Move by `delta` pages if the target stays within `[1, total_pages]`.
    ///
    /// Out-of-range moves are ignored. Returns whether the page changed.
    pub fn change_page(&mut self, delta: isize, len: usize) -> bool {
        let total = self.total_pages(len);
        match self.current_page.checked_add_signed(delta) {
            Some(target) if target >= 1 && target <= total && target != self.current_page => {
                self.current_page = target;
                true
            }
            _ => false,
        }
    }

    /// "Previous" is disabled on the first page
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// "Next" is disabled on the last page
    pub fn has_next(&self, len: usize) -> bool {
        self.current_page < self.total_pages(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        let cursor = PaginationCursor::new(5);
        assert_eq!(cursor.total_pages(0), 1);
        assert_eq!(cursor.total_pages(1), 1);
        assert_eq!(cursor.total_pages(5), 1);
        assert_eq!(cursor.total_pages(6), 2);
        assert_eq!(cursor.total_pages(12), 3);
    }

    #[test]
    fn test_page_range() {
        let mut cursor = PaginationCursor::new(5);
        assert_eq!(cursor.page_range(12), 0..5);
        assert_eq!(cursor.page_range(3), 0..3);
        assert_eq!(cursor.page_range(0), 0..0);

        assert!(cursor.change_page(2, 12));
        assert_eq!(cursor.page_range(12), 10..12);
    }

    #[test]
    fn test_change_page_bounds() {
        let mut cursor = PaginationCursor::new(5);

        // Boundary moves are no-ops
        assert!(!cursor.change_page(-1, 12));
        assert_eq!(cursor.current_page(), 1);

        assert!(cursor.change_page(1, 12));
        assert!(cursor.change_page(1, 12));
        assert_eq!(cursor.current_page(), 3);

        assert!(!cursor.change_page(1, 12));
        assert_eq!(cursor.current_page(), 3);

        // A jump that overshoots is ignored entirely, not clamped
        assert!(!cursor.change_page(-5, 12));
        assert_eq!(cursor.current_page(), 3);
    }

    #[test]
    fn test_single_page_view() {
        let mut cursor = PaginationCursor::new(5);
        assert!(!cursor.change_page(1, 0));
        assert!(!cursor.has_previous());
        assert!(!cursor.has_next(0));
        assert!(!cursor.has_next(5));
    }

    #[test]
    fn test_prev_next_flags() {
        let mut cursor = PaginationCursor::new(5);
        assert!(!cursor.has_previous());
        assert!(cursor.has_next(11));

        cursor.change_page(2, 11);
        assert!(cursor.has_previous());
        assert!(!cursor.has_next(11));

        cursor.reset();
        assert_eq!(cursor.current_page(), 1);
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        let cursor = PaginationCursor::new(0);
        assert_eq!(cursor.page_size(), 1);
        assert_eq!(cursor.total_pages(3), 3);
    }
}
