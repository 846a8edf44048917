//! Request lifecycle for the current filter tuple.
//!
//! Each tuple change starts a new generation. Requests run as background
//! tasks and report back through [`FeedEvent::FetchCompleted`]; only the
//! response tagged with the live generation may touch the result state.
//! Older requests are never aborted, just ignored when they land.

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::error::{ErrorInfo, FetchError};
use crate::events::FeedEvent;
use crate::models::{ResultPage, SearchRequest};
use crate::query_state::FilterTuple;
use crate::traits::NewsSource;

/// What [`FetchCoordinator::resolve`] did with a completed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Current generation succeeded; results replaced.
    Applied { total_pages: u32 },
    /// Current generation failed; error surfaced, results kept.
    Failed,
    /// Response belonged to an older generation and was dropped.
    Superseded,
}

/// Owns the generation counter, loading flag, results and last error.
pub struct FetchCoordinator {
    source: Arc<dyn NewsSource>,
    events: mpsc::UnboundedSender<FeedEvent>,
    page_size: u32,
    generation: u64,
    loading: bool,
    results: ResultPage,
    error: Option<ErrorInfo>,
    last_request: Option<SearchRequest>,
}

impl std::fmt::Debug for FetchCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchCoordinator")
            .field("generation", &self.generation)
            .field("loading", &self.loading)
            .field("articles", &self.results.articles.len())
            .field("total_pages", &self.results.total_pages)
            .field("error", &self.error)
            .finish()
    }
}

impl FetchCoordinator {
    pub fn new(
        source: Arc<dyn NewsSource>,
        events: mpsc::UnboundedSender<FeedEvent>,
        page_size: u32,
    ) -> Self {
        Self {
            source,
            events,
            page_size,
            generation: 0,
            loading: false,
            results: ResultPage::default(),
            error: None,
            last_request: None,
        }
    }

    /// Start a fetch for `tuple` and return its generation.
    ///
    /// The generation is bumped before the request task is spawned, so any
    /// response that is still in flight is already stale by the time this
    /// returns. Must be called from within a Tokio runtime.
    pub fn on_tuple_changed(&mut self, tuple: &FilterTuple) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.error = None;

        let generation = self.generation;
        let request = SearchRequest::new(&tuple.query, tuple.region, tuple.page, self.page_size);
        self.last_request = Some(request.clone());

        tracing::debug!(
            generation,
            q = %request.q,
            country = %request.country,
            page = request.page,
            "Starting fetch"
        );

        let source = Arc::clone(&self.source);
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = source.search(&request).await;
            if events
                .send(FeedEvent::FetchCompleted { generation, result })
                .is_err()
            {
                tracing::debug!(generation, "Event channel closed, dropping fetch result");
            }
        });

        generation
    }

    /// Apply or discard the result of the request tagged `generation`.
    pub fn resolve(
        &mut self,
        generation: u64,
        result: Result<ResultPage, FetchError>,
    ) -> FetchOutcome {
        if generation != self.generation {
            tracing::debug!(
                generation,
                current = self.generation,
                "Discarding superseded fetch result"
            );
            return FetchOutcome::Superseded;
        }

        self.loading = false;
        match result {
            Ok(page) => {
                let total_pages = page.total_pages;
                tracing::debug!(
                    generation,
                    articles = page.articles.len(),
                    total_pages,
                    "Fetch applied"
                );
                self.results = page;
                self.error = None;
                FetchOutcome::Applied { total_pages }
            }
            Err(err) => {
                tracing::warn!(generation, error = %err, "Fetch failed");
                self.error = Some(ErrorInfo::from(&err));
                FetchOutcome::Failed
            }
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn results(&self) -> &ResultPage {
        &self.results
    }

    pub fn error(&self) -> Option<&ErrorInfo> {
        self.error.as_ref()
    }

    /// Parameters of the most recently started request.
    pub fn last_request(&self) -> Option<&SearchRequest> {
        self.last_request.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::models::{Article, Region};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records requests and answers with one article titled after the query.
    #[derive(Default)]
    struct EchoSource {
        requests: Mutex<Vec<SearchRequest>>,
    }

    #[async_trait]
    impl NewsSource for EchoSource {
        async fn search(&self, request: &SearchRequest) -> Result<ResultPage, FetchError> {
            self.requests.lock().unwrap().push(request.clone());
            Ok(page_titled(&request.q, 3))
        }
    }

    fn page_titled(title: &str, total_pages: u32) -> ResultPage {
        ResultPage::new(
            vec![Article {
                title: title.to_string(),
                description: String::new(),
                url: format!("https://example.com/{}", title),
                image_url: None,
                source_name: "Test".to_string(),
            }],
            total_pages,
        )
    }

    fn tuple(query: &str, region: Region, page: u32) -> FilterTuple {
        FilterTuple {
            query: query.to_string(),
            region,
            page,
        }
    }

    fn coordinator() -> (
        FetchCoordinator,
        Arc<EchoSource>,
        mpsc::UnboundedReceiver<FeedEvent>,
    ) {
        let source = Arc::new(EchoSource::default());
        let (tx, rx) = mpsc::unbounded_channel();
        let coordinator = FetchCoordinator::new(source.clone(), tx, 10);
        (coordinator, source, rx)
    }

    #[tokio::test]
    async fn test_tuple_change_starts_fetch() {
        let (mut coordinator, source, mut rx) = coordinator();

        let generation = coordinator.on_tuple_changed(&tuple("", Region::Us, 1));
        assert_eq!(generation, 1);
        assert!(coordinator.is_loading());

        let Some(FeedEvent::FetchCompleted { generation, result }) = rx.recv().await else {
            panic!("expected FetchCompleted");
        };
        assert_eq!(generation, 1);

        let requests = source.requests.lock().unwrap().clone();
        assert_eq!(
            requests,
            vec![SearchRequest {
                q: "latest".to_string(),
                country: Region::Us,
                page: 1,
                page_size: 10,
            }]
        );

        assert_eq!(
            coordinator.resolve(generation, result),
            FetchOutcome::Applied { total_pages: 3 }
        );
        assert!(!coordinator.is_loading());
        assert_eq!(coordinator.results().articles[0].title, "latest");
    }

    #[tokio::test]
    async fn test_stale_success_is_discarded() {
        let (mut coordinator, _source, _rx) = coordinator();

        let g1 = coordinator.on_tuple_changed(&tuple("old", Region::Us, 1));
        let g2 = coordinator.on_tuple_changed(&tuple("new", Region::Us, 1));
        assert!(g2 > g1);

        assert_eq!(
            coordinator.resolve(g2, Ok(page_titled("new", 2))),
            FetchOutcome::Applied { total_pages: 2 }
        );
        assert_eq!(
            coordinator.resolve(g1, Ok(page_titled("old", 9))),
            FetchOutcome::Superseded
        );

        assert_eq!(coordinator.results().articles[0].title, "new");
        assert_eq!(coordinator.results().total_pages, 2);
        assert!(!coordinator.is_loading());
    }

    #[tokio::test]
    async fn test_stale_result_arriving_first_keeps_loading() {
        let (mut coordinator, _source, _rx) = coordinator();

        let g1 = coordinator.on_tuple_changed(&tuple("old", Region::Us, 1));
        let _g2 = coordinator.on_tuple_changed(&tuple("new", Region::Us, 1));

        assert_eq!(
            coordinator.resolve(g1, Ok(page_titled("old", 9))),
            FetchOutcome::Superseded
        );
        assert!(coordinator.is_loading(), "g2 is still in flight");
        assert!(coordinator.results().articles.is_empty());
    }

    #[tokio::test]
    async fn test_stale_failure_is_silent() {
        let (mut coordinator, _source, _rx) = coordinator();

        let g1 = coordinator.on_tuple_changed(&tuple("old", Region::Us, 1));
        let g2 = coordinator.on_tuple_changed(&tuple("new", Region::Us, 1));
        let _ = coordinator.resolve(g2, Ok(page_titled("new", 1)));

        let outcome = coordinator.resolve(
            g1,
            Err(FetchError::Timeout {
                message: "slow".to_string(),
            }),
        );
        assert_eq!(outcome, FetchOutcome::Superseded);
        assert!(coordinator.error().is_none());
    }

    #[tokio::test]
    async fn test_failure_preserves_results() {
        let (mut coordinator, _source, _rx) = coordinator();

        let g1 = coordinator.on_tuple_changed(&tuple("apple", Region::Us, 1));
        let _ = coordinator.resolve(g1, Ok(page_titled("apple", 4)));
        let before = coordinator.results().clone();

        let g2 = coordinator.on_tuple_changed(&tuple("apple", Region::Us, 2));
        let outcome = coordinator.resolve(
            g2,
            Err(FetchError::HttpStatus {
                status: 502,
                message: "bad gateway".to_string(),
            }),
        );

        assert_eq!(outcome, FetchOutcome::Failed);
        assert_eq!(coordinator.results(), &before);
        assert!(!coordinator.is_loading());
        assert_eq!(
            coordinator.error().map(|e| e.kind),
            Some(ErrorKind::NetworkFailure)
        );
    }

    #[tokio::test]
    async fn test_new_fetch_clears_error_and_success_keeps_it_clear() {
        let (mut coordinator, _source, _rx) = coordinator();

        let g1 = coordinator.on_tuple_changed(&tuple("x", Region::Us, 1));
        let _ = coordinator.resolve(
            g1,
            Err(FetchError::Malformed {
                message: "missing articles".to_string(),
            }),
        );
        assert_eq!(
            coordinator.error().map(|e| e.kind),
            Some(ErrorKind::MalformedResponse)
        );

        let g2 = coordinator.on_tuple_changed(&tuple("y", Region::Us, 1));
        assert!(coordinator.error().is_none());
        let _ = coordinator.resolve(g2, Ok(page_titled("y", 1)));
        assert!(coordinator.error().is_none());
    }

    #[tokio::test]
    async fn test_request_uses_configured_page_size() {
        let source = Arc::new(EchoSource::default());
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut coordinator = FetchCoordinator::new(source, tx, 25);

        coordinator.on_tuple_changed(&tuple("rust", Region::Gb, 2));
        assert_eq!(
            coordinator.last_request(),
            Some(&SearchRequest::new("rust", Region::Gb, 2, 25))
        );
    }
}
