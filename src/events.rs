//! Messages posted back to the owning event loop by background tasks.
//!
//! Timer tasks and request tasks never touch state directly; they send one of
//! these and the [`App`](crate::app::App) applies it on its own thread.

use crate::error::FetchError;
use crate::models::ResultPage;

#[derive(Debug, Clone)]
pub enum FeedEvent {
    /// The debounce quiet period elapsed for the input tagged `ticket`.
    QuerySettled { ticket: u64, text: String },
    /// A search request finished, tagged with the generation that issued it.
    FetchCompleted {
        generation: u64,
        result: Result<ResultPage, FetchError>,
    },
}
