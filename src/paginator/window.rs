//! Page window selection.
//!
//! The window `[range_start, range_end]` follows the cursor: single steps
//! slide it by at most one page, jumps re-center it. Its two edge slots turn
//! into skip markers whenever they do not touch the first or last page.

use serde::Serialize;
use tracing::trace;

use super::label::RangeLabel;
use super::state::PaginationState;

/// Text shown on skip markers
pub const SKIP_LABEL: &str = "•••";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipDirection {
    Backward,
    Forward,
}

/// One button of the page strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ButtonDescriptor {
    Page { index: usize, current: bool },
    Skip { direction: SkipDirection },
}

impl ButtonDescriptor {
    pub fn page(index: usize, page_index: usize) -> Self {
        Self::Page {
            index,
            current: index == page_index,
        }
    }

    pub fn skip(direction: SkipDirection) -> Self {
        Self::Skip { direction }
    }

    pub fn is_current(&self) -> bool {
        matches!(self, Self::Page { current: true, .. })
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, Self::Skip { .. })
    }

    /// One-based page number, or the skip marker text.
    pub fn label(&self) -> String {
        match self {
            Self::Page { index, .. } => (index + 1).to_string(),
            Self::Skip { .. } => SKIP_LABEL.to_string(),
        }
    }
}

/// Enabled state of a fixed navigation button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Affordance {
    pub enabled: bool,
}

/// Previous/next (and optionally first/last) buttons around the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Affordances {
    pub previous: Affordance,
    pub next: Affordance,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<Affordance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<Affordance>,
}

impl Affordances {
    pub fn for_state(state: &PaginationState, disabled: bool, with_first_last: bool) -> Self {
        let has_pages = state.page_count() > 0;
        let back = !disabled && has_pages && state.page_index() > 0;
        let forward = !disabled && has_pages && state.page_index() < state.last_page_index();
        Self {
            previous: Affordance { enabled: back },
            next: Affordance { enabled: forward },
            first: with_first_last.then_some(Affordance { enabled: back }),
            last: with_first_last.then_some(Affordance { enabled: forward }),
        }
    }
}

/// Everything the host needs to draw the control
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderPlan {
    pub buttons: Vec<ButtonDescriptor>,
    pub affordances: Affordances,
    pub range_label: String,
}

impl RenderPlan {
    pub fn build(
        state: &PaginationState,
        label: &RangeLabel,
        disabled: bool,
        with_first_last: bool,
    ) -> Self {
        Self {
            buttons: descriptors(state),
            affordances: Affordances::for_state(state, disabled, with_first_last),
            range_label: label.format(state.page_index(), state.page_size(), state.total_items()),
        }
    }

    pub fn skip_count(&self) -> usize {
        self.buttons.iter().filter(|b| b.is_skip()).count()
    }

    pub fn has_skip(&self, direction: SkipDirection) -> bool {
        self.buttons.contains(&ButtonDescriptor::skip(direction))
    }
}

/// Moves the window bounds to follow the current page.
///
/// Running it again without an intervening change leaves the window as is.
pub fn recompute_range(state: &mut PaginationState) {
    let page_index = state.page_index();
    let last = state.last_page_index();
    let window = state.window_size();

    if state.page_count() <= window.get() {
        state.set_range(0, last);
        return;
    }

    let (start, end) = (state.range_start(), state.range_end());
    let span = window.span();
    let in_bounds = end <= last && end - start == span;
    if state.settled_index == Some(page_index) && in_bounds {
        return;
    }

    let previous = state.previous_page_index();
    let jumped = state.settled_index.is_none()
        || !in_bounds
        || page_index.abs_diff(previous) > 1
        || page_index < start
        || page_index > end;

    let (mut start, mut end) = if page_index == 0 {
        (0, span)
    } else if page_index == last {
        (last - span, last)
    } else if jumped {
        centered(page_index, window.half_width(), span, last)
    } else {
        let middle = (start + end) / 2;
        if page_index > previous && page_index > middle && end < last {
            (start + 1, end + 1)
        } else if page_index < previous && page_index < middle && start > 0 {
            (start - 1, end - 1)
        } else {
            (start, end)
        }
    };

    if !shows_page(start, end, page_index, last) {
        (start, end) = centered(page_index, window.half_width(), span, last);
    }

    trace!(page_index, previous, start, end, jumped, "window recomputed");
    state.set_range(start, end);
}

/// Ordered buttons for the current state. Pure: reads the window as stored.
///
/// Only the window is walked, so the cost does not depend on the page count.
pub fn descriptors(state: &PaginationState) -> Vec<ButtonDescriptor> {
    let page_count = state.page_count();
    if page_count == 0 {
        return Vec::new();
    }

    let page_index = state.page_index();
    let last = state.last_page_index();
    let (start, end) = (state.range_start(), state.range_end());

    let mut buttons = Vec::with_capacity(state.window_size().get().min(page_count) + 2);
    buttons.push(ButtonDescriptor::page(0, page_index));

    if last >= 2 {
        for i in start.max(1)..=end.min(last - 1) {
            if i == start && start > 1 {
                buttons.push(ButtonDescriptor::skip(SkipDirection::Backward));
            } else if i == end && i != start && end + 1 < last {
                buttons.push(ButtonDescriptor::skip(SkipDirection::Forward));
            } else {
                buttons.push(ButtonDescriptor::page(i, page_index));
            }
        }
    }

    if page_count > 1 {
        buttons.push(ButtonDescriptor::page(last, page_index));
    }
    buttons
}

/// Whether [`descriptors`] would contain the skip marker for `direction`.
pub fn shows_skip(state: &PaginationState, direction: SkipDirection) -> bool {
    if state.page_count() == 0 {
        return false;
    }

    let last = state.last_page_index();
    let (start, end) = (state.range_start(), state.range_end());
    match direction {
        SkipDirection::Backward => start > 1 && start < last,
        SkipDirection::Forward => end >= 1 && end != start && end + 1 < last,
    }
}

fn centered(page_index: usize, half_width: usize, span: usize, last: usize) -> (usize, usize) {
    let start = page_index.saturating_sub(half_width).min(last - span);
    (start, start + span)
}

/// Whether `page_index` lands on a page button rather than outside the
/// window or under one of its skip markers.
fn shows_page(start: usize, end: usize, page_index: usize, last: usize) -> bool {
    if page_index == 0 || page_index == last {
        return true;
    }
    if page_index < start || page_index > end {
        return false;
    }
    let under_backward_skip = page_index == start && start > 1;
    let under_forward_skip = page_index == end && end + 1 < last;
    !under_backward_skip && !under_forward_skip
}
