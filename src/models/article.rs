use serde::{Deserialize, Serialize};

/// One news article as shown in the result list.
///
/// The coordinator treats this as opaque data; only the UI looks inside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    pub title: String,
    pub description: String,
    pub url: String,
    pub image_url: Option<String>,
    pub source_name: String,
}

impl Article {
    pub fn has_image(&self) -> bool {
        self.image_url.is_some()
    }
}

/// A complete page of results from one successful fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPage {
    pub articles: Vec<Article>,
    /// Always at least 1.
    pub total_pages: u32,
}

impl ResultPage {
    pub fn new(articles: Vec<Article>, total_pages: u32) -> Self {
        Self {
            articles,
            total_pages: total_pages.max(1),
        }
    }
}

impl Default for ResultPage {
    fn default() -> Self {
        Self::new(Vec::new(), 1)
    }
}

/// Source attribution as nested in the response body.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceRef {
    pub name: String,
}

/// Article as returned by the search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ArticleResponse {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub url: String,
    #[serde(default)]
    pub image: Option<String>,
    pub source: SourceRef,
}

impl From<ArticleResponse> for Article {
    fn from(raw: ArticleResponse) -> Self {
        Self {
            title: raw.title,
            description: raw.description.unwrap_or_default(),
            url: raw.url,
            image_url: raw.image.filter(|s| !s.is_empty()),
            source_name: raw.source.name,
        }
    }
}

/// Response body of `GET {base_url}?q=..&country=..&page=..&pageSize=..`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub articles: Vec<ArticleResponse>,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
}

impl From<SearchResponse> for ResultPage {
    fn from(raw: SearchResponse) -> Self {
        ResultPage::new(
            raw.articles.into_iter().map(Article::from).collect(),
            raw.total_pages,
        )
    }
}
