//! Canonical pagination facts with clamp-on-write semantics.
//!
//! Every external write goes through a setter that clamps the value into the
//! valid domain instead of rejecting it. The window bounds live here too but
//! are only ever moved by [`super::window::recompute_range`].

use serde::Serialize;

/// Number of page buttons shown around the current page.
///
/// Always odd so the current page can sit exactly in the middle, and never
/// below 3 so the window keeps one slot on each side for a skip marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WindowSize(usize);

impl WindowSize {
    pub const MIN: usize = 3;

    pub fn new(requested: i64) -> Self {
        let size = requested.max(Self::MIN as i64) as usize;
        if size % 2 == 0 {
            Self(size + 1)
        } else {
            Self(size)
        }
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Pages on each side of the middle slot.
    pub fn half_width(self) -> usize {
        self.0 / 2
    }

    /// Distance between the first and last slot of the window.
    pub fn span(self) -> usize {
        self.0 - 1
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self(5)
    }
}

/// Pagination state owned by a single control
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationState {
    /// Total number of rows
    total_items: usize,

    /// Rows per page
    page_size: usize,

    /// Current page (0-based)
    page_index: usize,

    /// Page index before the last transition
    previous_page_index: usize,

    window_size: WindowSize,

    /// Inclusive bounds of the visible window
    range_start: usize,
    range_end: usize,

    /// Page index the window was last computed for
    #[serde(skip)]
    pub(crate) settled_index: Option<usize>,
}

impl PaginationState {
    pub fn new(total_items: i64, page_size: i64, page_index: i64, window_size: i64) -> Self {
        let window_size = WindowSize::new(window_size);
        let mut state = Self {
            total_items: clamp_non_negative(total_items),
            page_size: clamp_non_negative(page_size),
            page_index: 0,
            previous_page_index: 0,
            window_size,
            range_start: 0,
            range_end: window_size.span(),
            settled_index: None,
        };
        state.page_index = state.clamp_index(page_index);
        state.previous_page_index = state.page_index;
        state
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn previous_page_index(&self) -> usize {
        self.previous_page_index
    }

    pub fn window_size(&self) -> WindowSize {
        self.window_size
    }

    pub fn range_start(&self) -> usize {
        self.range_start
    }

    pub fn range_end(&self) -> usize {
        self.range_end
    }

    /// `ceil(total_items / page_size)`, or 0 when there is nothing to page.
    pub fn page_count(&self) -> usize {
        if self.page_size == 0 {
            0
        } else {
            self.total_items.div_ceil(self.page_size)
        }
    }

    pub fn last_page_index(&self) -> usize {
        self.page_count().saturating_sub(1)
    }

    /// Stores the new page size. Any actual change sends the cursor back to
    /// the first page.
    pub fn set_page_size(&mut self, value: i64) {
        let page_size = clamp_non_negative(value);
        if page_size == self.page_size {
            return;
        }
        self.page_size = page_size;
        self.move_to(0);
        self.invalidate_window();
    }

    pub fn set_page_index(&mut self, value: i64) {
        let index = self.clamp_index(value);
        self.move_to(index);
    }

    pub fn set_total_items(&mut self, value: i64) {
        let total_items = clamp_non_negative(value);
        if total_items == self.total_items {
            return;
        }
        self.total_items = total_items;
        let index = self.page_index.min(self.last_page_index());
        if index != self.page_index {
            self.move_to(index);
        }
        self.invalidate_window();
    }

    pub fn set_window_size(&mut self, value: i64) {
        let window_size = WindowSize::new(value);
        if window_size != self.window_size {
            self.window_size = window_size;
            self.invalidate_window();
        }
    }

    /// Records a transition to `index`, which must already be in range.
    pub(crate) fn move_to(&mut self, index: usize) {
        self.previous_page_index = self.page_index;
        self.page_index = index;
    }

    pub(crate) fn set_range(&mut self, start: usize, end: usize) {
        self.range_start = start;
        self.range_end = end;
        self.settled_index = Some(self.page_index);
    }

    /// Forces the next recomputation to re-center instead of sliding.
    fn invalidate_window(&mut self) {
        self.settled_index = None;
    }

    fn clamp_index(&self, value: i64) -> usize {
        clamp_non_negative(value).min(self.last_page_index())
    }
}

fn clamp_non_negative(value: i64) -> usize {
    usize::try_from(value).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(PaginationState::new(100, 10, 0, 5).page_count(), 10);
        assert_eq!(PaginationState::new(101, 10, 0, 5).page_count(), 11);
        assert_eq!(PaginationState::new(1000, 11, 0, 5).page_count(), 91);
        assert_eq!(PaginationState::new(0, 10, 0, 5).page_count(), 0);
        assert_eq!(PaginationState::new(50, 0, 0, 5).page_count(), 0);
    }

    #[test]
    fn test_last_page_index_never_underflows() {
        let state = PaginationState::new(0, 10, 3, 5);
        assert_eq!(state.last_page_index(), 0);
        assert_eq!(state.page_index(), 0);
    }

    #[test]
    fn test_window_size_normalization() {
        assert_eq!(WindowSize::new(5).get(), 5);
        assert_eq!(WindowSize::new(4).get(), 5);
        assert_eq!(WindowSize::new(10).get(), 11);
        assert_eq!(WindowSize::new(1).get(), 3);
        assert_eq!(WindowSize::new(-7).get(), 3);
        assert_eq!(WindowSize::new(5).half_width(), 2);
        assert_eq!(WindowSize::new(5).span(), 4);
    }

    #[test]
    fn test_negative_page_size_is_clamped() {
        let mut state = PaginationState::new(100, 10, 0, 5);
        state.set_page_size(-777);
        assert_eq!(state.page_size(), 0);
        assert_eq!(state.page_count(), 0);
    }

    #[test]
    fn test_negative_page_index_is_clamped() {
        let mut state = PaginationState::new(100, 10, 4, 5);
        state.set_page_index(-77);
        assert_eq!(state.page_index(), 0);
        assert_eq!(state.previous_page_index(), 4);
    }

    #[test]
    fn test_page_index_clamped_to_last_page() {
        let mut state = PaginationState::new(100, 10, 0, 5);
        state.set_page_index(42);
        assert_eq!(state.page_index(), 9);
    }

    #[test]
    fn test_negative_total_items_is_clamped() {
        let mut state = PaginationState::new(100, 10, 2, 5);
        state.set_total_items(-1);
        assert_eq!(state.total_items(), 0);
        assert_eq!(state.page_index(), 0);
    }

    #[test]
    fn test_page_size_change_resets_to_first_page() {
        let mut state = PaginationState::new(1000, 10, 5, 5);
        state.set_page_size(20);
        assert_eq!(state.page_size(), 20);
        assert_eq!(state.page_index(), 0);
        assert_eq!(state.previous_page_index(), 5);
    }

    #[test]
    fn test_same_page_size_keeps_page() {
        let mut state = PaginationState::new(1000, 10, 5, 5);
        state.set_page_size(10);
        assert_eq!(state.page_index(), 5);
    }

    #[test]
    fn test_shrinking_total_items_reclamps_page() {
        let mut state = PaginationState::new(1000, 10, 50, 5);
        state.set_total_items(95);
        assert_eq!(state.page_index(), 9);
    }
}
