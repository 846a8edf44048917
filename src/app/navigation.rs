//! Region, page and selection navigation.
//!
//! The region and page methods return `true` when the filter tuple changed
//! and a fetch was started.

use super::App;
use crate::models::Region;

impl App {
    pub fn select_region(&mut self, region: Region) -> bool {
        let changed = self.query.set_region(region);
        self.dispatch_if_changed(changed)
    }

    pub fn cycle_region(&mut self) -> bool {
        self.select_region(self.query.region().next())
    }

    pub fn cycle_region_back(&mut self) -> bool {
        self.select_region(self.query.region().previous())
    }

    /// Go to page `n`, clamped to the known page range.
    pub fn go_to_page(&mut self, n: u32) -> bool {
        let changed = self.query.set_page(n);
        self.dispatch_if_changed(changed)
    }

    pub fn previous_page(&mut self) -> bool {
        let changed = self.query.previous_page();
        self.dispatch_if_changed(changed)
    }

    pub fn next_page(&mut self) -> bool {
        let changed = self.query.next_page();
        self.dispatch_if_changed(changed)
    }

    /// Move the article highlight up
    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.mark_dirty();
        }
    }

    /// Move the article highlight down
    pub fn move_down(&mut self) {
        let count = self.fetcher.results().articles.len();
        if count > 0 && self.selected < count - 1 {
            self.selected += 1;
            self.mark_dirty();
        }
    }
}
