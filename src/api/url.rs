//! Request URL construction and the inverse search-term extraction.
//!
//! `build` and [`extract_search_term`] are exact inverses for every search
//! term: parameters are form-url-encoded on the way out and decoded on the
//! way back.

use thiserror::Error;
use url::Url;

/// Hacker News search endpoint.
pub const DEFAULT_API_BASE: &str = "https://hn.algolia.com/api/v1/search";

/// Query parameter carrying the search term.
pub const PARAM_SEARCH: &str = "query";

/// Query parameter carrying the zero-based result page.
pub const PARAM_PAGE: &str = "page";

/// Base endpoint rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidBaseUrl {
    /// Base is not an absolute URL.
    #[error("Invalid API base URL '{url}': {message}")]
    Parse {
        /// Rejected input.
        url: String,
        /// Parser error description.
        message: String,
    },

    /// Base parsed but is not http or https.
    #[error("API base URL must use http or https, got '{0}'")]
    UnsupportedScheme(String),
}

/// Builds canonical search URLs against a fixed base endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryUrlBuilder {
    base: Url,
}

impl QueryUrlBuilder {
    /// Validates `base` once so that [`build`](Self::build) is infallible.
    pub fn new(base: &str) -> Result<Self, InvalidBaseUrl> {
        let url = Url::parse(base).map_err(|e| InvalidBaseUrl::Parse {
            url: base.to_string(),
            message: e.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(Self { base: url }),
            _ => Err(InvalidBaseUrl::UnsupportedScheme(base.to_string())),
        }
    }

    /// The validated base endpoint.
    pub fn base(&self) -> &str {
        self.base.as_str()
    }

    /// URL for `page` of the results for `search_term`.
    ///
    /// Query parameters already present on the base are kept in front.
    pub fn build(&self, search_term: &str, page: u32) -> String {
        let mut url = self.base.clone();
        url.query_pairs_mut()
            .append_pair(PARAM_SEARCH, search_term)
            .append_pair(PARAM_PAGE, &page.to_string());
        url.into()
    }
}

/// Search term encoded in `url`, or `None` if it carries no search parameter.
pub fn extract_search_term(url: &str) -> Option<String> {
    let url = Url::parse(url).ok()?;
    url.query_pairs()
        .filter(|(key, _)| key == PARAM_SEARCH)
        .last()
        .map(|(_, value)| value.into_owned())
}

/// Result page encoded in `url`, or `None` if it carries no valid page parameter.
pub fn extract_page(url: &str) -> Option<u32> {
    let url = Url::parse(url).ok()?;
    url.query_pairs()
        .filter(|(key, _)| key == PARAM_PAGE)
        .last()
        .and_then(|(_, value)| value.parse().ok())
}
