//! View-only data for the renderer.
//!
//! The UI draws from a [`FeedView`] and never sees `App`, so rendering stays a
//! pure function of this struct.

use crate::error::ErrorInfo;
use crate::models::{Article, Region};

/// Borrowed snapshot of the feed after the latest state transition.
#[derive(Debug, Clone, Copy)]
pub struct FeedView<'a> {
    pub articles: &'a [Article],
    pub total_pages: u32,
    pub current_page: u32,
    pub loading: bool,
    pub error: Option<&'a ErrorInfo>,
    /// Raw text in the search box (may not be settled yet)
    pub input: &'a str,
    /// Query the displayed results belong to
    pub query: &'a str,
    pub region: Region,
    pub selected: Option<usize>,
    /// A typed query is waiting for the quiet period
    pub debounce_pending: bool,
}

impl FeedView<'_> {
    pub fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// "Page x of y" label for the footer.
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages)
    }
}
