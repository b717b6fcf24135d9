//! Paged page-collection state shared by list, tag, search and backlink views.
//!
//! DESIGN
//! ======
//! Every `{pages, total}` response lands in the same shape so the listing
//! component and pager render identically wherever a page collection shows up.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use crate::net::api::DEFAULT_LIMIT;
use crate::net::types::{Page, PageList};

/// One window of a server-side page collection.
#[derive(Clone, Debug, PartialEq)]
pub struct PageListing {
    pub items: Vec<Page>,
    /// Server-reported total across all windows.
    pub total: u64,
    pub offset: u32,
    pub limit: u32,
    pub loading: bool,
}

impl Default for PageListing {
    fn default() -> Self {
        Self { items: Vec::new(), total: 0, offset: 0, limit: DEFAULT_LIMIT, loading: true }
    }
}

impl PageListing {
    /// Mark a fetch for the window starting at `offset` as in flight.
    pub fn begin(&mut self, offset: u32) {
        self.offset = offset;
        self.loading = true;
    }

    pub fn apply(&mut self, list: PageList) {
        self.items = list.pages;
        self.total = list.total;
        self.loading = false;
    }

    /// Settle a fetch: success replaces the window, failure empties it.
    pub fn apply_result<E>(&mut self, result: Result<PageList, E>) {
        match result {
            Ok(list) => self.apply(list),
            Err(_) => self.fail(),
        }
    }

    /// A failed fetch leaves an empty window rather than a stuck spinner.
    pub fn fail(&mut self) {
        self.items.clear();
        self.total = 0;
        self.loading = false;
    }

    /// Loaded and holding nothing; drives the empty-state message.
    pub fn is_empty(&self) -> bool {
        !self.loading && self.items.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.offset > 0
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.offset) + u64::from(self.limit) < self.total
    }

    pub fn previous_offset(&self) -> u32 {
        self.offset.saturating_sub(self.limit)
    }

    pub fn next_offset(&self) -> Option<u32> {
        if self.has_next() { self.offset.checked_add(self.limit) } else { None }
    }

    /// Human-readable window position, e.g. `51-100 of 130`.
    pub fn range_label(&self) -> String {
        if self.items.is_empty() {
            return format!("0 of {}", self.total);
        }
        let start = u64::from(self.offset) + 1;
        let end = u64::from(self.offset) + self.items.len() as u64;
        format!("{start}-{end} of {}", self.total)
    }
}
