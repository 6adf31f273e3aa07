use crate::types::{Cursor, PageInfo};

/// Paging state for the current query only: trailing cursor, completeness
/// flags, and the server-reported total match count.
///
/// Replaced wholesale by every successful response and cleared on a new
/// query, so it always mirrors the most recent page the server produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationState {
    end_cursor: Option<Cursor>,
    has_next_page: bool,
    has_previous_page: bool,
    total_count: u64,
}

impl PaginationState {
    /// Back to "no pages fetched".
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Overwrite paging state with the latest server response.
    pub fn apply_page(&mut self, info: &PageInfo, total_count: u64) {
        self.end_cursor = info.end_cursor.clone();
        self.has_next_page = info.has_next_page;
        self.has_previous_page = info.has_previous_page;
        self.total_count = total_count;
    }

    /// Whether a continuation request can be issued. True only when the
    /// server flagged another page and handed us a trailing cursor for it.
    pub fn has_next_page(&self) -> bool {
        self.has_next_page && self.end_cursor.is_some()
    }

    pub fn has_previous_page(&self) -> bool {
        self.has_previous_page
    }

    pub fn end_cursor(&self) -> Option<&Cursor> {
        self.end_cursor.as_ref()
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_info(has_next: bool, end_cursor: Option<&str>) -> PageInfo {
        PageInfo {
            has_next_page: has_next,
            has_previous_page: false,
            start_cursor: None,
            end_cursor: end_cursor.map(Cursor::new),
        }
    }

    #[test]
    fn starts_with_no_pages_fetched() {
        let state = PaginationState::default();
        assert!(!state.has_next_page());
        assert!(state.end_cursor().is_none());
        assert_eq!(state.total_count(), 0);
    }

    #[test]
    fn apply_page_tracks_the_latest_response() {
        let mut state = PaginationState::default();
        state.apply_page(&page_info(true, Some("c1")), 42);
        state.apply_page(&page_info(true, Some("c2")), 42);

        assert_eq!(state.end_cursor().map(Cursor::as_str), Some("c2"));
        assert!(state.has_next_page());
        assert_eq!(state.total_count(), 42);
    }

    #[test]
    fn reset_clears_everything() {
        let mut state = PaginationState::default();
        state.apply_page(&page_info(true, Some("c1")), 42);
        state.reset();
        assert_eq!(state, PaginationState::default());
    }

    #[test]
    fn next_page_requires_a_cursor() {
        // A server that flags another page without a trailing cursor leaves
        // us with nothing to replay; treat that as "no next page".
        let mut state = PaginationState::default();
        state.apply_page(&page_info(true, None), 10);
        assert!(!state.has_next_page());
    }
}
