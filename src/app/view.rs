//! View construction for UI rendering.

use super::App;
use crate::view_state::FeedView;

impl App {
    /// Read-only snapshot of everything the renderer needs.
    pub fn view(&self) -> FeedView<'_> {
        let results = self.fetcher.results();
        FeedView {
            articles: &results.articles,
            total_pages: self.query.total_pages(),
            current_page: self.query.page(),
            loading: self.fetcher.is_loading(),
            error: self.fetcher.error(),
            input: &self.input,
            query: self.query.query(),
            region: self.query.region(),
            selected: if results.articles.is_empty() {
                None
            } else {
                Some(self.selected)
            },
            debounce_pending: self.debouncer.is_pending(),
        }
    }
}
