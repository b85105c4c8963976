//! The pagination cursor for the record table.
//!
//! The cursor is a `(current_page, page_size)` pair where every transition
//! is a total function: there is no invalid state, only clamping. The
//! current page is clamped back into `[1, total_pages]` whenever the record
//! count or the page size changes underneath it.

use std::cmp;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Derived page numbers for the info line and the prev/next controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub total: usize,
}

impl PageInfo {
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// One rendered page: a contiguous slice of the record set, insertion order.
#[derive(Debug)]
pub struct PageView<'a, T> {
    pub slice: &'a [T],
    pub info: PageInfo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    current_page: usize,
    page_size: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new()
    }
}

impl Pager {
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self, total: usize) -> usize {
        cmp::max(1, total.div_ceil(self.page_size))
    }

    /// Change the page size and jump back to the first page.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.current_page = 1;
    }

    /// Move one page back. Silent no-op on the first page.
    pub fn prev(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// Move one page forward. Silent no-op on the last page.
    pub fn next(&mut self, total: usize) -> bool {
        if self.current_page < self.total_pages(total) {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Re-clamp after a successful delete: an empty set goes back to page 1,
    /// otherwise a now-dangling page is pulled down to the last one.
    pub fn after_delete(&mut self, total: usize) {
        if total == 0 {
            self.current_page = 1;
        } else {
            let total_pages = self.total_pages(total);
            if self.current_page > total_pages {
                self.current_page = total_pages;
            }
        }
    }

    /// Clamp the cursor against the given records and return the current
    /// page slice.
    pub fn view<'a, T>(&mut self, items: &'a [T]) -> PageView<'a, T> {
        let total = items.len();
        let total_pages = self.total_pages(total);
        if self.current_page > total_pages {
            self.current_page = total_pages;
        }

        let start = cmp::min((self.current_page - 1) * self.page_size, total);
        let end = cmp::min(start + self.page_size, total);

        PageView {
            slice: &items[start..end],
            info: PageInfo {
                current_page: self.current_page,
                total_pages,
                total,
            },
        }
    }
}
