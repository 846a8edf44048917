//! Authoritative filter tuple and the page-reset policy.
//!
//! Every setter returns `Some(tuple)` exactly when the visible
//! `(query, region, page)` triple changed; that return value is the
//! change notification the fetch coordinator reacts to. No-op updates return
//! `None`.

use crate::models::Region;

/// Snapshot of the current search filters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterTuple {
    pub query: String,
    pub region: Region,
    /// 1-based page number
    pub page: u32,
}

impl Default for FilterTuple {
    fn default() -> Self {
        Self {
            query: String::new(),
            region: Region::default(),
            page: 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct QueryState {
    tuple: FilterTuple,
    total_pages: u32,
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new(Region::default())
    }
}

impl QueryState {
    pub fn new(region: Region) -> Self {
        Self {
            tuple: FilterTuple {
                region,
                ..FilterTuple::default()
            },
            total_pages: 1,
        }
    }

    pub fn tuple(&self) -> &FilterTuple {
        &self.tuple
    }

    pub fn query(&self) -> &str {
        &self.tuple.query
    }

    pub fn region(&self) -> Region {
        self.tuple.region
    }

    pub fn page(&self) -> u32 {
        self.tuple.page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Apply a settled query. A different query starts again at page 1.
    #[must_use]
    pub fn set_settled_query(&mut self, text: impl Into<String>) -> Option<FilterTuple> {
        let text = text.into();
        if text == self.tuple.query {
            return None;
        }
        self.tuple.query = text;
        self.tuple.page = 1;
        Some(self.tuple.clone())
    }

    /// Change the region filter. A different region starts again at page 1.
    #[must_use]
    pub fn set_region(&mut self, region: Region) -> Option<FilterTuple> {
        if region == self.tuple.region {
            return None;
        }
        self.tuple.region = region;
        self.tuple.page = 1;
        Some(self.tuple.clone())
    }

    /// Navigate to page `n`, clamped to `[1, total_pages]`.
    #[must_use]
    pub fn set_page(&mut self, n: u32) -> Option<FilterTuple> {
        let clamped = n.clamp(1, self.total_pages);
        if clamped == self.tuple.page {
            return None;
        }
        self.tuple.page = clamped;
        Some(self.tuple.clone())
    }

    #[must_use]
    pub fn previous_page(&mut self) -> Option<FilterTuple> {
        self.set_page(self.tuple.page.saturating_sub(1))
    }

    #[must_use]
    pub fn next_page(&mut self) -> Option<FilterTuple> {
        self.set_page(self.tuple.page.saturating_add(1))
    }

    /// Record the page count reported by a completed fetch.
    ///
    /// This is an output of fetching, never an input: it does not produce a
    /// tuple and leaves the current page where it is.
    pub fn set_total_pages(&mut self, n: u32) {
        self.total_pages = n.max(1);
    }

    pub fn has_previous_page(&self) -> bool {
        self.tuple.page > 1
    }

    pub fn has_next_page(&self) -> bool {
        self.tuple.page < self.total_pages
    }
}
