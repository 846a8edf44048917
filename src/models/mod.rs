//! Data model shared by the query state, the fetch coordinator and the UI.

mod article;
mod region;
mod request;

pub use article::{Article, ArticleResponse, ResultPage, SearchResponse, SourceRef};
pub use region::{Region, RegionParseError};
pub use request::{SearchRequest, FALLBACK_QUERY};
