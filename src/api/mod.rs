//! Search API access.
//!
//! - `url`: pure request URL construction and term extraction
//! - `client`: the HTTP GET collaborator

pub mod client;
pub mod url;

pub use self::client::{HttpStoryClient, StoryClient};
pub use self::url::{
    extract_page, extract_search_term, InvalidBaseUrl, QueryUrlBuilder, DEFAULT_API_BASE,
};
