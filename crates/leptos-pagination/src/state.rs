//! Pagination State
//!
//! Per-view page cursor. Not shared between views.

use std::ops::Range;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaginationState {
    current_page: u32,
    items_per_page: usize,
}

impl PaginationState {
    /// Start on page 1. A page size of 0 is treated as 1.
    pub fn new(items_per_page: usize) -> Self {
        Self {
            current_page: 1,
            items_per_page: items_per_page.max(1),
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// `ceil(count / items_per_page)`, never less than 1
    pub fn total_pages(&self, count: usize) -> u32 {
        let pages = count.div_ceil(self.items_per_page).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Move to `page` if it is a different, existing page.
    /// Returns whether the current page changed.
    pub fn go_to(&mut self, page: u32, count: usize) -> bool {
        if page < 1 || page > self.total_pages(count) || page == self.current_page {
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn prev(&mut self, count: usize) -> bool {
        match self.current_page.checked_sub(1) {
            Some(page) => self.go_to(page, count),
            None => false,
        }
    }

    pub fn next(&mut self, count: usize) -> bool {
        self.go_to(self.current_page.saturating_add(1), count)
    }

    /// Back to page 1, used whenever the underlying collection changes
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Index range of the visible page within a list of `count` entries
    pub fn page_bounds(&self, count: usize) -> Range<usize> {
        let start = (self.current_page as usize - 1)
            .saturating_mul(self.items_per_page)
            .min(count);
        let end = start.saturating_add(self.items_per_page).min(count);
        start..end
    }

    /// Visible window of `items`
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.page_bounds(items.len())]
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(10)
    }
}
