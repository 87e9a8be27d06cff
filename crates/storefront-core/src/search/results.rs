//! Stateless pagination over a filtered view.

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Pagination info.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Requested page (1-indexed, not clamped).
    pub page: usize,
    /// Items per page.
    pub per_page: usize,
    /// Total number of items.
    pub total: usize,
    /// Total number of pages, never less than 1.
    pub total_pages: usize,
    /// Whether there's a next page.
    pub has_next: bool,
    /// Whether there's a previous page.
    pub has_prev: bool,
}

impl Pagination {
    /// Create pagination info.
    pub fn new(page: usize, per_page: NonZeroUsize, total: usize) -> Self {
        let per_page = per_page.get();
        let total_pages = if total == 0 {
            1
        } else {
            total.div_ceil(per_page)
        };

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Index of the first item on this page, or `None` when the page is out of range.
    pub fn offset(&self) -> Option<usize> {
        if self.page == 0 {
            return None;
        }
        (self.page - 1)
            .checked_mul(self.per_page)
            .filter(|&offset| offset < self.total)
    }

    /// Get page numbers for display (e.g., [3, 4, 5, 6, 7]).
    pub fn page_numbers(&self, max_visible: usize) -> Vec<usize> {
        if max_visible == 0 {
            return Vec::new();
        }
        if self.total_pages <= max_visible {
            return (1..=self.total_pages).collect();
        }

        let half = max_visible / 2;
        let current = self.page.clamp(1, self.total_pages);
        let start = current.saturating_sub(half).max(1);
        let end = (start + max_visible - 1).min(self.total_pages);
        let start = (end + 1).saturating_sub(max_visible).max(1);

        (start..=end).collect()
    }

    /// Check if on first page.
    pub fn is_first(&self) -> bool {
        self.page == 1
    }

    /// Check if on last page.
    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }

    /// Get start item number (1-indexed), 0 when the page is empty.
    pub fn start_item(&self) -> usize {
        self.offset().map_or(0, |offset| offset + 1)
    }

    /// Get end item number, 0 when the page is empty.
    pub fn end_item(&self) -> usize {
        self.offset()
            .map_or(0, |offset| offset.saturating_add(self.per_page).min(self.total))
    }
}

/// One page of a filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// The items on this page.
    pub items: &'a [T],
    /// Pagination info.
    pub pagination: Pagination,
}

impl<'a, T> Page<'a, T> {
    /// Total number of pages, never less than 1.
    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages
    }

    /// Check if this page has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get number of items in this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Split into the page items and the page count.
    pub fn into_parts(self) -> (&'a [T], usize) {
        (self.items, self.pagination.total_pages)
    }
}

/// Slice `items` into fixed-size pages and return page `page` (1-indexed).
///
/// The page is not clamped: page 0 or a page past the end yields an empty
/// slice. `total_pages` is at least 1, even for an empty list.
pub fn paginate<T>(items: &[T], page_size: NonZeroUsize, page: usize) -> Page<'_, T> {
    let pagination = Pagination::new(page, page_size, items.len());
    let slice = match pagination.offset() {
        Some(start) => {
            let end = start.saturating_add(pagination.per_page).min(items.len());
            &items[start..end]
        }
        None => &items[..0],
    };

    Page {
        items: slice,
        pagination,
    }
}
