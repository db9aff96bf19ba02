//! Page windowing and page-number-label generation.
//!
//! Everything here is a pure function of its arguments. The enclosing state
//! machine owns the current page and calls in on demand; nothing is cached
//! between calls.

use std::ops::Range;

/// Largest page count the selection strip lists in full. Beyond this the
/// strip collapses skipped ranges into ellipsis markers.
const MAX_FLAT_PAGES: usize = 5;

/// One slot in the page-selection strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLabel {
    /// A selectable page number.
    Page(usize),
    /// Non-interactive marker standing in for skipped page numbers.
    Ellipsis,
}

impl PageLabel {
    /// The page number behind this label, if it is selectable.
    pub fn page(self) -> Option<usize> {
        match self {
            Self::Page(page) => Some(page),
            Self::Ellipsis => None,
        }
    }
}

/// Total page count for `total_items` at `page_size` items per page.
///
/// An empty collection still counts as one (empty) page.
///
/// # Panics
///
/// Panics if `page_size` is zero. A non-positive page size is a caller bug,
/// not a runtime condition, and is not silently recovered.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    assert!(page_size > 0, "page_size must be positive");
    total_items.div_ceil(page_size).max(1)
}

/// Half-open index range of the items visible on `current_page`.
///
/// The nominal window `[(p-1)*size, p*size)` is clamped to
/// `[0, total_items)`; a page past the end yields an empty range rather
/// than an error, so callers never index out of bounds.
///
/// # Panics
///
/// Panics if `page_size` is zero or `current_page` is zero (pages are
/// 1-indexed).
pub fn page_bounds(total_items: usize, current_page: usize, page_size: usize) -> Range<usize> {
    assert!(page_size > 0, "page_size must be positive");
    assert!(current_page > 0, "pages are 1-indexed");
    let start = (current_page - 1).saturating_mul(page_size).min(total_items);
    let end = current_page.saturating_mul(page_size).min(total_items);
    start..end
}

/// The items visible on `current_page`.
pub fn visible_slice<T>(items: &[T], current_page: usize, page_size: usize) -> &[T] {
    &items[page_bounds(items.len(), current_page, page_size)]
}

/// Validates a page-change request against the page count.
///
/// Returns the accepted page, or `None` when the request is out of range
/// and the current page must stay as it is. "Previous" on page 1 arrives
/// here as a request for page 0 and is rejected the same way "Next" past
/// the last page is.
pub fn change_page(requested: usize, total_pages: usize) -> Option<usize> {
    (1..=total_pages).contains(&requested).then_some(requested)
}

/// Page labels for the selection strip, in display order.
///
/// The first and last pages stay reachable and the current page keeps its
/// immediate neighbours visible; everything skipped in between collapses
/// into an ellipsis. Ranges of up to `MAX_FLAT_PAGES` pages are listed
/// in full.
pub fn page_labels(current_page: usize, total_pages: usize) -> Vec<PageLabel> {
    use PageLabel::{Ellipsis, Page};

    if total_pages <= MAX_FLAT_PAGES {
        return (1..=total_pages).map(Page).collect();
    }

    if current_page <= 3 {
        let mut labels: Vec<PageLabel> = (1..=4).map(Page).collect();
        labels.push(Ellipsis);
        labels.push(Page(total_pages));
        labels
    } else if current_page >= total_pages - 2 {
        let mut labels = vec![Page(1), Ellipsis];
        labels.extend((total_pages - 3..=total_pages).map(Page));
        labels
    } else {
        vec![
            Page(1),
            Ellipsis,
            Page(current_page - 1),
            Page(current_page),
            Page(current_page + 1),
            Ellipsis,
            Page(total_pages),
        ]
    }
}
