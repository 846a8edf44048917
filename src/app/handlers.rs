//! Event handling for the App.

use super::App;
use crate::events::FeedEvent;
use crate::fetch::FetchOutcome;

impl App {
    /// Apply one background event.
    pub fn handle_event(&mut self, event: FeedEvent) {
        match event {
            FeedEvent::QuerySettled { ticket, text } => {
                let Some(text) = self.debouncer.accept(ticket, text) else {
                    return;
                };
                tracing::debug!(query = %text, "Query settled");
                let changed = self.query.set_settled_query(text);
                self.dispatch_if_changed(changed);
            }
            FeedEvent::FetchCompleted { generation, result } => {
                match self.fetcher.resolve(generation, result) {
                    FetchOutcome::Applied { total_pages } => {
                        self.query.set_total_pages(total_pages);
                        self.selected = 0;
                        self.mark_dirty();
                    }
                    FetchOutcome::Failed => self.mark_dirty(),
                    FetchOutcome::Superseded => {}
                }
            }
        }
    }

    /// Replace the raw search text and restart the debounce timer.
    pub fn on_raw_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.debouncer.on_raw_input(self.input.clone());
        self.mark_dirty();
    }

    pub fn type_char(&mut self, c: char) {
        let mut text = self.input.clone();
        text.push(c);
        self.on_raw_input(text);
    }

    pub fn backspace(&mut self) {
        if self.input.is_empty() {
            return;
        }
        let mut text = self.input.clone();
        text.pop();
        self.on_raw_input(text);
    }

    pub fn clear_input(&mut self) {
        if !self.input.is_empty() {
            self.on_raw_input(String::new());
        }
    }

    /// Settle the current input immediately, skipping the quiet period.
    ///
    /// Returns `true` if a fetch was started.
    pub fn submit_query(&mut self) -> bool {
        self.debouncer.cancel();
        let changed = self.query.set_settled_query(self.input.clone());
        self.dispatch_if_changed(changed)
    }
}
