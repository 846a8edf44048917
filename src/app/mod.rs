//! Application state for the news feed.
//!
//! [`App`] is the single owner of the three coordination pieces:
//! - [`QueryState`] - the filter tuple and page bounds
//! - [`Debouncer`] - quiet-period handling for typed input
//! - [`FetchCoordinator`] - request lifecycle and result state
//!
//! Background tasks only send [`FeedEvent`]s; every mutation happens on the
//! thread that calls into `App`, so none of this state needs a lock.

mod handlers;
mod navigation;
mod view;

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::config::FeedConfig;
use crate::debouncer::Debouncer;
use crate::events::FeedEvent;
use crate::fetch::FetchCoordinator;
use crate::models::{Article, Region, SearchRequest};
use crate::query_state::{FilterTuple, QueryState};
use crate::traits::NewsSource;

/// Main application state
#[derive(Debug)]
pub struct App {
    pub(crate) query: QueryState,
    pub(crate) debouncer: Debouncer,
    pub(crate) fetcher: FetchCoordinator,
    /// Receiver for background events; taken by the main loop for `select!`
    pub events_rx: Option<mpsc::UnboundedReceiver<FeedEvent>>,
    /// Raw text in the search box
    pub(crate) input: String,
    /// Index of the highlighted article
    pub(crate) selected: usize,
    /// Set whenever visible state changes
    pub needs_redraw: bool,
    pub should_quit: bool,
}

impl App {
    /// Build an app around `source` with the given starting region.
    ///
    /// Nothing is fetched until [`start`](Self::start) is called.
    pub fn new(config: &FeedConfig, source: Arc<dyn NewsSource>, region: Region) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            query: QueryState::new(region),
            debouncer: Debouncer::new(config.quiet_period, events_tx.clone()),
            fetcher: FetchCoordinator::new(source, events_tx, config.page_size),
            events_rx: Some(events_rx),
            input: String::new(),
            selected: 0,
            needs_redraw: true,
            should_quit: false,
        }
    }

    /// Issue the initial fetch for the starting tuple.
    pub fn start(&mut self) -> u64 {
        let tuple = self.query.tuple().clone();
        self.dispatch(&tuple)
    }

    /// Current filter tuple.
    pub fn tuple(&self) -> &FilterTuple {
        self.query.tuple()
    }

    /// Generation of the most recently started fetch.
    pub fn generation(&self) -> u64 {
        self.fetcher.generation()
    }

    /// Wire parameters of the most recently started fetch.
    pub fn last_request(&self) -> Option<&SearchRequest> {
        self.fetcher.last_request()
    }

    pub fn selected_article(&self) -> Option<&Article> {
        self.fetcher.results().articles.get(self.selected)
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Stop the app. Pending debounce timers are released.
    pub fn quit(&mut self) {
        self.debouncer.cancel();
        self.should_quit = true;
    }

    /// Wait for the next background event and apply it.
    ///
    /// Returns `false` when the receiver was taken or every sender is gone.
    pub async fn process_next_event(&mut self) -> bool {
        let Some(rx) = self.events_rx.as_mut() else {
            return false;
        };
        let next = rx.recv().await;
        match next {
            Some(event) => {
                self.handle_event(event);
                true
            }
            None => false,
        }
    }

    /// Forward a changed tuple to the fetch coordinator.
    pub(crate) fn dispatch(&mut self, tuple: &FilterTuple) -> u64 {
        self.mark_dirty();
        self.fetcher.on_tuple_changed(tuple)
    }

    pub(crate) fn dispatch_if_changed(&mut self, changed: Option<FilterTuple>) -> bool {
        match changed {
            Some(tuple) => {
                self.dispatch(&tuple);
                true
            }
            None => false,
        }
    }
}
