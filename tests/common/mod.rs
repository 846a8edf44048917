//! Shared fixtures for integration tests.

pub mod mocks;

#[allow(unused_imports)]
pub use mocks::*;

use headlines::models::{Article, ResultPage};

/// An article whose URL and description are derived from `title`.
pub fn article(title: &str) -> Article {
    Article {
        title: title.to_string(),
        description: format!("About {}", title),
        url: format!("https://news.example.com/{}", title.replace(' ', "-")),
        image_url: None,
        source_name: "Example Wire".to_string(),
    }
}

/// A single-article page titled `title`.
#[allow(dead_code)]
pub fn page_of(title: &str, total_pages: u32) -> ResultPage {
    ResultPage::new(vec![article(title)], total_pages)
}

/// JSON body in the shape the search endpoint returns.
#[allow(dead_code)]
pub fn response_body(titles: &[&str], total_pages: u32) -> serde_json::Value {
    let articles: Vec<serde_json::Value> = titles
        .iter()
        .map(|title| {
            serde_json::json!({
                "title": title,
                "description": format!("About {}", title),
                "url": format!("https://news.example.com/{}", title),
                "image": format!("https://news.example.com/{}.jpg", title),
                "source": { "name": "Example Wire" }
            })
        })
        .collect();
    serde_json::json!({ "articles": articles, "totalPages": total_pages })
}
