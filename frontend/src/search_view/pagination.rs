//! Page window and navigation guards.

use common::search_const::{PAGE_WINDOW_MARGIN, PAGE_WINDOW_SIZE};

use crate::data_definitions::search_state::PageState;

/// Page numbers offered for direct navigation: up to `PAGE_WINDOW_SIZE` values
/// around `current_page`, slid inwards at either end, always inside `1..=total_pages`.
pub fn page_window(current_page: u64, total_pages: u64) -> Vec<u64> {
    if total_pages == 0 {
        return vec![];
    }
    let current = current_page.clamp(1, total_pages);
    let span = PAGE_WINDOW_SIZE - 1;

    let mut start = current.saturating_sub(PAGE_WINDOW_MARGIN).max(1);
    let mut end = current.saturating_add(PAGE_WINDOW_MARGIN).min(total_pages);
    if end - start < span {
        if start == 1 {
            end = (start + span).min(total_pages);
        } else {
            start = end.saturating_sub(span).max(1);
        }
    }
    (start..=end).collect()
}

/// Last known page count; 1 when nothing has loaded yet, so only page 1 is reachable.
pub fn known_total_pages(page_state: Option<&PageState>) -> u64 {
    page_state.map(|p| p.total_pages).filter(|total| *total > 0).unwrap_or(1)
}

pub fn can_go_to_page(page: u64, page_state: Option<&PageState>) -> bool {
    page >= 1 && page <= known_total_pages(page_state)
}

/// The catalog's own flag decides, not page arithmetic.
pub fn can_go_next(page_state: Option<&PageState>) -> bool {
    page_state.is_some_and(|p| p.has_next_page)
}

pub fn can_go_previous(page_state: Option<&PageState>) -> bool {
    page_state.is_some_and(|p| p.has_previous_page)
}
