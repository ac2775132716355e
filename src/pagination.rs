// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Splitting a result list into fixed-size pages.
//!
//! Pages are 1-based. A requested page is always clamped into range rather
//! than rejected, so a stale page number (say, page 3 after a query narrowed
//! results to one page) lands on the last valid page.

use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::error::{Error, Result};

/// Page size of the home country grid.
pub const COUNTRY_GRID_PAGE_SIZE: usize = 12;

/// Page size of every other list (resources, partners, Explore...).
pub const LIST_PAGE_SIZE: usize = 6;

/// Paging state over `total_items` results.
///
/// Deserialized state goes through the same clamping as the constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "PaginationFields")]
pub struct Pagination {
    page_size: usize,
    total_items: usize,
    page: usize,
}

/// Wire form of [`Pagination`], unchecked.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PaginationFields {
    page_size: usize,
    total_items: usize,
    #[serde(default = "first_page")]
    page: usize,
}

fn first_page() -> usize {
    1
}

impl From<PaginationFields> for Pagination {
    fn from(raw: PaginationFields) -> Self {
        Pagination::new(raw.page_size, raw.total_items).with_page(raw.page)
    }
}

impl Pagination {
    /// Start on page 1. A page size of 0 is treated as 1.
    pub fn new(page_size: usize, total_items: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            total_items,
            page: 1,
        }
    }

    /// Like [`Pagination::new`], but rejects a page size of 0.
    pub fn try_new(page_size: usize, total_items: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(Error::InvalidPageSize(page_size));
        }
        Ok(Self::new(page_size, total_items))
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Current page, 1-based.
    pub fn page(&self) -> usize {
        self.page
    }

    /// `ceil(total_items / page_size)`; 0 when there are no items.
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size)
    }

    /// Jump to `page`, clamped into `1..=max(total_pages, 1)`.
    pub fn set_page(&mut self, page: usize) -> usize {
        self.page = page.clamp(1, self.total_pages().max(1));
        self.page
    }

    /// Builder form of [`Pagination::set_page`].
    pub fn with_page(mut self, page: usize) -> Self {
        self.set_page(page);
        self
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Advance one page; no-op on the last page.
    pub fn next(&mut self) -> usize {
        if self.has_next() {
            self.page += 1;
        }
        self.page
    }

    /// Go back one page; no-op on the first page.
    pub fn prev(&mut self) -> usize {
        if self.has_prev() {
            self.page -= 1;
        }
        self.page
    }

    /// Bounds of the current page within the full result list.
    pub fn range(&self) -> Range<usize> {
        let start = ((self.page - 1) * self.page_size).min(self.total_items);
        let end = (start + self.page_size).min(self.total_items);
        start..end
    }

    /// The current page's slice of `items`.
    ///
    /// `items` should hold `total_items` entries; a shorter slice is cut
    /// further rather than indexed out of bounds.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let Range { start, end } = self.range();
        let end = end.min(items.len());
        &items[start.min(end)..end]
    }
}

/// One entry of a page selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "page")]
pub enum PageMarker {
    Page(usize),
    Ellipsis,
}

/// Page selector entries: first, last, current and its neighbours.
///
/// Gaps become [`PageMarker::Ellipsis`], except a gap of a single page, which
/// is shown as that page (an ellipsis would take the same room).
///
/// ```
/// use geohub::pagination::{page_window, PageMarker::*};
///
/// assert_eq!(page_window(5, 9), vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(9)]);
/// assert_eq!(page_window(3, 5), vec![Page(1), Page(2), Page(3), Page(4), Page(5)]);
/// ```
pub fn page_window(current: usize, total: usize) -> Vec<PageMarker> {
    if total == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total);

    let mut pages = vec![1, total];
    pages.extend([current.saturating_sub(1), current, current + 1]);
    pages.retain(|p| (1..=total).contains(p));
    pages.sort_unstable();
    pages.dedup();

    let mut window = Vec::with_capacity(pages.len() + 2);
    let mut last = 0;
    for page in pages {
        match page - last {
            1 => {}
            2 => window.push(PageMarker::Page(last + 1)),
            _ => window.push(PageMarker::Ellipsis),
        }
        window.push(PageMarker::Page(page));
        last = page;
    }
    window
}
