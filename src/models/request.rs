use serde::Serialize;

use super::Region;

/// Query text sent when the settled query is empty.
pub const FALLBACK_QUERY: &str = "latest";

/// Wire-level parameters for one search request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub q: String,
    pub country: Region,
    pub page: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
}

impl SearchRequest {
    /// Build a request, substituting [`FALLBACK_QUERY`] for an empty query.
    pub fn new(query: &str, country: Region, page: u32, page_size: u32) -> Self {
        let q = if query.is_empty() {
            FALLBACK_QUERY.to_string()
        } else {
            query.to_string()
        };
        Self {
            q,
            country,
            page,
            page_size,
        }
    }
}
