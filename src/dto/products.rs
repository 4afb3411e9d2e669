//! Payloads exchanged by the catalog HTTP endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::product::Product;
use crate::domain::query::SearchRequest;

/// Raw query parameters of the search endpoint.
///
/// Values stay as strings so that a malformed `page` falls back to the first
/// page instead of failing extraction.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub s: Option<String>,
    pub sort: Option<String>,
    pub page: Option<String>,
}

impl From<SearchQuery> for SearchRequest {
    fn from(query: SearchQuery) -> Self {
        SearchRequest::from_params(query.s, query.sort.as_deref(), query.page.as_deref())
    }
}

/// Body returned by `GET /`.
#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub products: Vec<Product>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
