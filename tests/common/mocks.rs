//! Scripted [`NewsSource`] for coordination tests.

#![allow(dead_code)]

use async_trait::async_trait;
use headlines::error::FetchError;
use headlines::models::{ResultPage, SearchRequest};
use headlines::traits::NewsSource;
use std::sync::{Arc, Mutex};
use std::time::Duration;

type Responder =
    dyn Fn(&SearchRequest) -> (Duration, Result<ResultPage, FetchError>) + Send + Sync;

/// Answers each request through a closure that picks a delay and a result.
///
/// Requests are recorded in the order the source sees them.
pub struct ScriptedSource {
    responder: Box<Responder>,
    requests: Mutex<Vec<SearchRequest>>,
}

impl ScriptedSource {
    pub fn new<F>(responder: F) -> Arc<Self>
    where
        F: Fn(&SearchRequest) -> (Duration, Result<ResultPage, FetchError>)
            + Send
            + Sync
            + 'static,
    {
        Arc::new(Self {
            responder: Box::new(responder),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Source that answers every request immediately with one article titled
    /// after the query.
    pub fn echo(total_pages: u32) -> Arc<Self> {
        Self::new(move |req| (Duration::ZERO, Ok(super::page_of(&req.q, total_pages))))
    }

    pub fn requests(&self) -> Vec<SearchRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl NewsSource for ScriptedSource {
    async fn search(&self, request: &SearchRequest) -> Result<ResultPage, FetchError> {
        self.requests.lock().unwrap().push(request.clone());
        let (delay, result) = (self.responder)(request);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        result
    }
}
