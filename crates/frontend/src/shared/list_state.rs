//! Pagination state shared by every list page.

use serde::Serialize;

/// Query string of a list call: `page=2&nbElementsPerPage=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub page: usize,
    pub nb_elements_per_page: usize,
}

/// State of a paginated list page.
///
/// `current_page` is 1-based. Once `pages_count > 0` it stays in
/// `[1, pages_count]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    pub current_page: usize,
    pub pages_count: usize,
    pub page_size: usize,
    pub rows: Vec<T>,
    pub errors: Vec<String>,
    pub is_loading: bool,
}

impl<T> ListState<T> {
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            pages_count: 0,
            page_size: page_size.max(1),
            rows: Vec::new(),
            errors: Vec::new(),
            is_loading: false,
        }
    }

    pub fn query(&self) -> ListQuery {
        ListQuery {
            page: self.current_page,
            nb_elements_per_page: self.page_size,
        }
    }

    /// A fetch is in flight until rows or errors arrive.
    pub fn start_loading(&mut self) {
        self.is_loading = true;
    }

    /// Record the total item count and clamp the current page.
    pub fn apply_count(&mut self, count: u64) {
        let count = usize::try_from(count).unwrap_or(usize::MAX);
        self.pages_count = count.div_ceil(self.page_size);
        if self.pages_count > 0 && self.current_page > self.pages_count {
            self.current_page = self.pages_count;
        }
    }

    pub fn apply_rows(&mut self, rows: Vec<T>) {
        self.rows = rows;
        self.is_loading = false;
    }

    pub fn apply_errors(&mut self, errors: Vec<String>) {
        self.errors = errors;
        self.is_loading = false;
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    /// Move to `page`. Returns `false` when the page is out of range or
    /// already current, in which case nothing must be fetched.
    pub fn go_to(&mut self, page: usize) -> bool {
        let upper = self.pages_count.max(1);
        if page == 0 || page > upper || page == self.current_page {
            return false;
        }
        self.current_page = page;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_utils::with_query;
    use crate::shared::http::{Abort, RequestSlot};
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeHandle(Rc<Cell<bool>>);

    impl Abort for FakeHandle {
        fn abort(&self) {
            self.0.set(true);
        }
    }

    #[test]
    fn test_pages_count_rounds_up() {
        let mut state: ListState<u32> = ListState::new(10);
        state.apply_count(25);
        assert_eq!(state.pages_count, 3);

        state.apply_count(0);
        assert_eq!(state.pages_count, 0);
        assert_eq!(state.current_page, 1);

        state.apply_count(30);
        assert_eq!(state.pages_count, 3);
    }

    #[test]
    fn test_huge_count_does_not_wrap() {
        let mut state: ListState<u32> = ListState::new(10);
        state.apply_count(u64::MAX);
        assert!(state.pages_count >= usize::MAX / 10);
        assert!(state.go_to(2));
    }

    #[test]
    fn test_loading_flag() {
        let mut state: ListState<u32> = ListState::new(10);
        state.start_loading();
        assert!(state.is_loading);
        state.apply_rows(vec![1, 2]);
        assert!(!state.is_loading);

        state.start_loading();
        state.apply_errors(vec!["Erreur".into()]);
        assert!(!state.is_loading);
        assert_eq!(state.errors, vec!["Erreur".to_string()]);
    }

    #[test]
    fn test_current_page_clamped_after_shrink() {
        let mut state: ListState<u32> = ListState::new(10);
        state.apply_count(25);
        assert!(state.go_to(3));
        state.apply_count(11);
        assert_eq!(state.current_page, 2);
    }

    #[test]
    fn test_go_to_rejects_out_of_range() {
        let mut state: ListState<u32> = ListState::new(10);
        state.apply_count(25);
        assert!(!state.go_to(0));
        assert!(!state.go_to(4));
        assert!(!state.go_to(1));
        assert!(state.go_to(2));
    }

    #[test]
    fn test_page_change_aborts_previous_request() {
        let mut state: ListState<u32> = ListState::new(10);
        let mut slot = RequestSlot::default();

        let first = FakeHandle::default();
        slot.replace(first.clone());
        assert_eq!(
            with_query("/classes", &state.query()),
            "/classes?page=1&nbElementsPerPage=10"
        );
        state.apply_count(25);
        assert_eq!(state.pages_count, 3);

        assert!(state.go_to(2));
        let second = FakeHandle::default();
        slot.replace(second.clone());

        assert!(first.0.get());
        assert!(!second.0.get());
        assert_eq!(
            with_query("/classes", &state.query()),
            "/classes?page=2&nbElementsPerPage=10"
        );
    }
}
