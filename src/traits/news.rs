//! Search backend abstraction.

use async_trait::async_trait;

use crate::error::FetchError;
use crate::models::{ResultPage, SearchRequest};

/// Anything that can answer a [`SearchRequest`] with a [`ResultPage`].
///
/// The production implementation is [`NewsClient`](crate::client::NewsClient).
/// Implementations must convert every failure into a [`FetchError`]; they are
/// read-only, so issuing the same request twice is harmless.
///
/// # Example
///
/// ```ignore
/// use headlines::traits::NewsSource;
/// use headlines::models::{Region, SearchRequest};
///
/// async fn first_title<S: NewsSource>(source: &S) -> Option<String> {
///     let request = SearchRequest::new("rust", Region::Us, 1, 10);
///     let page = source.search(&request).await.ok()?;
///     page.articles.first().map(|a| a.title.clone())
/// }
/// ```
#[async_trait]
pub trait NewsSource: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> Result<ResultPage, FetchError>;
}
