//! Page slicing and page-scoped table state.
//!
//! `paginate` is total: any page number, including 0 or one past the end,
//! yields a (possibly empty) slice rather than an error. Boundary handling is
//! the caller's job, which `PageState` does for the table components.

use super::expansion::OpenRows;

/// One page worth of records plus the numbers the pager needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub visible: &'a [T],
    pub total_pages: usize,
    /// Zero-based index of the first visible record.
    pub start_index: usize,
    /// Exclusive end index, never past the end of the records.
    pub end_index: usize,
}

pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1))
}

/// Slice `records` for the 1-based `page`.
///
/// A `page_size` of 0 is treated as 1. Pages outside `1..=total_pages`
/// produce an empty `visible` slice.
pub fn paginate<T>(records: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let total_pages = total_pages(records.len(), page_size);

    if page == 0 {
        return Page {
            visible: &[],
            total_pages,
            start_index: 0,
            end_index: 0,
        };
    }

    let start_index = (page - 1).saturating_mul(page_size);
    let end_index = start_index.saturating_add(page_size).min(records.len());
    let visible = if start_index >= records.len() {
        &[]
    } else {
        &records[start_index..end_index]
    };

    Page {
        visible,
        total_pages,
        start_index,
        end_index,
    }
}

/// Table state that lives as long as the page component.
///
/// Invariant: whenever `current_page` changes, `open_rows` is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState<K: Ord> {
    current_page: usize,
    items_per_page: usize,
    open_rows: OpenRows<K>,
}

impl<K: Ord + Clone> PageState<K> {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            current_page: 1,
            items_per_page: items_per_page.max(1),
            open_rows: OpenRows::new(),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn open_rows(&self) -> &OpenRows<K> {
        &self.open_rows
    }

    pub fn is_open(&self, key: &K) -> bool {
        self.open_rows.is_open(key)
    }

    pub fn toggle_row(&mut self, key: K) -> bool {
        self.open_rows.toggle_in_place(key)
    }

    /// Jump to `page` (clamped to at least 1). Collapses rows if the page moved.
    pub fn go_to(&mut self, page: usize) {
        let page = page.max(1);
        if page != self.current_page {
            self.current_page = page;
            self.open_rows.reset();
        }
    }

    /// Advance one page, stopping at `total_pages`.
    pub fn next(&mut self, total_pages: usize) {
        if self.current_page < total_pages {
            self.go_to(self.current_page + 1);
        }
    }

    pub fn prev(&mut self) {
        if self.current_page > 1 {
            self.go_to(self.current_page - 1);
        }
    }

    pub fn has_next(&self, total_pages: usize) -> bool {
        self.current_page < total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    /// The filter predicate changed: back to page 1 with nothing expanded.
    pub fn on_filter_change(&mut self) {
        self.current_page = 1;
        self.open_rows.reset();
    }

    /// The underlying data changed size: keep the current page inside
    /// `1..=max(1, total_pages)`.
    pub fn on_data_change(&mut self, total_items: usize) {
        let last = total_pages(total_items, self.items_per_page).max(1);
        if self.current_page > last {
            self.go_to(last);
        }
    }

    pub fn slice<'a, T>(&self, records: &'a [T]) -> Page<'a, T> {
        paginate(records, self.current_page, self.items_per_page)
    }
}
