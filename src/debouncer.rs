//! Debouncing of raw query-text edits.
//!
//! Every edit restarts a quiet-period timer. When the timer runs out without
//! another edit, a single [`FeedEvent::QuerySettled`] is posted carrying the
//! latest text.
//!
//! Each timer is tagged with a ticket. The owner must route the settled event
//! back through [`Debouncer::accept`], which drops it unless the ticket is
//! still live. A timer that already fired before a newer edit (or a cancel)
//! therefore never leaks through, even though its message is in the channel.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::events::FeedEvent;

/// Coalesces bursts of raw input into settled values.
///
/// Dropping the debouncer cancels the pending timer.
#[derive(Debug)]
pub struct Debouncer {
    quiet_period: Duration,
    events: mpsc::UnboundedSender<FeedEvent>,
    /// Timer task for the latest edit, if one is armed
    pending: Option<JoinHandle<()>>,
    /// Ticket of the only timer allowed to settle
    ticket: u64,
}

impl Debouncer {
    pub fn new(quiet_period: Duration, events: mpsc::UnboundedSender<FeedEvent>) -> Self {
        Self {
            quiet_period,
            events,
            pending: None,
            ticket: 0,
        }
    }

    /// Record `text` and restart the quiet-period timer.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn on_raw_input(&mut self, text: impl Into<String>) {
        self.abort_timer();
        self.ticket += 1;

        let ticket = self.ticket;
        let text = text.into();
        let quiet_period = self.quiet_period;
        let events = self.events.clone();

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet_period).await;
            tracing::trace!(ticket, "Debounce timer elapsed");
            if events.send(FeedEvent::QuerySettled { ticket, text }).is_err() {
                tracing::debug!("Event channel closed, dropping settled query");
            }
        }));
    }

    /// Validate a settled event. Returns the text only for the live ticket.
    pub fn accept(&mut self, ticket: u64, text: String) -> Option<String> {
        if ticket != self.ticket || self.pending.is_none() {
            tracing::trace!(ticket, live = self.ticket, "Ignoring stale settled query");
            return None;
        }
        self.pending = None;
        Some(text)
    }

    /// Cancel any pending timer. No settled value will be accepted for it.
    pub fn cancel(&mut self) {
        if self.pending.is_some() {
            tracing::trace!(ticket = self.ticket, "Debounce cancelled");
        }
        self.abort_timer();
        self.ticket += 1;
    }

    /// True while a timer is armed and not yet accepted.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    fn abort_timer(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.abort_timer();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUIET: Duration = Duration::from_millis(500);

    /// Receive the next settled event and run it through `accept`.
    async fn next_settled(
        debouncer: &mut Debouncer,
        rx: &mut mpsc::UnboundedReceiver<FeedEvent>,
    ) -> Option<String> {
        match rx.recv().await? {
            FeedEvent::QuerySettled { ticket, text } => debouncer.accept(ticket, text),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_coalesces_to_last_value() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(QUIET, tx);

        debouncer.on_raw_input("a");
        tokio::time::advance(Duration::from_millis(100)).await;
        debouncer.on_raw_input("ap");
        tokio::time::advance(Duration::from_millis(100)).await;
        debouncer.on_raw_input("apple");

        let settled = next_settled(&mut debouncer, &mut rx).await;
        assert_eq!(settled.as_deref(), Some("apple"));
        assert!(!debouncer.is_pending());

        tokio::time::sleep(QUIET * 4).await;
        assert!(rx.try_recv().is_err(), "only one settled event expected");
    }

    #[tokio::test(start_paused = true)]
    async fn test_settles_only_after_quiet_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(QUIET, tx);

        debouncer.on_raw_input("rust");
        tokio::time::sleep(Duration::from_millis(499)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(matches!(
            rx.try_recv(),
            Ok(FeedEvent::QuerySettled { ref text, .. }) if text == "rust"
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_value_propagates() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(QUIET, tx);

        debouncer.on_raw_input("");
        let settled = next_settled(&mut debouncer, &mut rx).await;
        assert_eq!(settled.as_deref(), Some(""));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_suppresses_pending_value() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(QUIET, tx);

        debouncer.on_raw_input("abandoned");
        tokio::time::advance(Duration::from_millis(200)).await;
        debouncer.cancel();
        assert!(!debouncer.is_pending());

        tokio::time::sleep(QUIET * 2).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_releases_timer() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(QUIET, tx);
        debouncer.on_raw_input("gone");
        drop(debouncer);

        tokio::time::sleep(QUIET * 2).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_already_fired_timer_is_rejected_after_new_input() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(QUIET, tx);

        debouncer.on_raw_input("first");
        tokio::time::sleep(QUIET + Duration::from_millis(1)).await;
        // "first" is queued but not yet processed when the next edit lands.
        debouncer.on_raw_input("second");

        let stale = match rx.recv().await {
            Some(FeedEvent::QuerySettled { ticket, text }) => debouncer.accept(ticket, text),
            other => panic!("unexpected event: {:?}", other),
        };
        assert_eq!(stale, None);

        let settled = next_settled(&mut debouncer, &mut rx).await;
        assert_eq!(settled.as_deref(), Some("second"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_already_fired_timer_is_rejected_after_cancel() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(QUIET, tx);

        debouncer.on_raw_input("late");
        tokio::time::sleep(QUIET + Duration::from_millis(1)).await;
        debouncer.cancel();

        let settled = next_settled(&mut debouncer, &mut rx).await;
        assert_eq!(settled, None);
    }
}
