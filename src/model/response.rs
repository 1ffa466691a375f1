//! Search API response body.

use crate::model::Story;
use serde::Deserialize;

/// Body of `GET /search?query=..&page=..`.
///
/// Only the fields the state machine consumes are decoded; everything else
/// in the payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchResponse {
    /// Stories on this page, in API order.
    pub hits: Vec<Story>,
    /// Zero-based page index the API answered with.
    #[serde(default)]
    pub page: u32,
}

impl SearchResponse {
    /// Response carrying `hits` as page `page`.
    pub fn new(hits: Vec<Story>, page: u32) -> Self {
        Self { hits, page }
    }
}
