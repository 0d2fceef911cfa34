//! Fixed-size page windowing over the filtered member list.

use std::ops::{Range, RangeInclusive};

pub const ITEMS_PER_PAGE: usize = 10;

/// 1-indexed page cursor. `current_page` always stays within
/// `1..=total_pages`, and `total_pages` is never below 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    items_per_page: usize,
    item_count: usize,
    current_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(ITEMS_PER_PAGE)
    }
}

impl Pagination {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            items_per_page: items_per_page.max(1),
            item_count: 0,
            current_page: 1,
        }
    }

    pub fn total_pages_for(item_count: usize, items_per_page: usize) -> usize {
        item_count.div_ceil(items_per_page.max(1)).max(1)
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        Self::total_pages_for(self.item_count, self.items_per_page)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn page_numbers(&self) -> RangeInclusive<usize> {
        1..=self.total_pages()
    }

    /// Index range of the current page within the item list.
    pub fn window(&self) -> Range<usize> {
        let start = (self.current_page - 1) * self.items_per_page;
        let start = start.min(self.item_count);
        let end = (start + self.items_per_page).min(self.item_count);
        start..end
    }

    /// Updates the item count and pulls the cursor back into range.
    /// Returns true when the current page moved.
    pub fn set_item_count(&mut self, item_count: usize) -> bool {
        self.item_count = item_count;
        let clamped = self.current_page.min(self.total_pages());
        self.move_to(clamped)
    }

    /// Moves to `page`, clamped into `1..=total_pages`. Returns true when the
    /// current page moved.
    pub fn go_to(&mut self, page: usize) -> bool {
        let clamped = page.clamp(1, self.total_pages());
        self.move_to(clamped)
    }

    fn move_to(&mut self, page: usize) -> bool {
        if page == self.current_page {
            return false;
        }
        self.current_page = page;
        true
    }
}

#[cfg(test)]
#[path = "tests/pagination_tests.rs"]
mod tests;
