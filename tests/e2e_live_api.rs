//! E2E smoke tests against the live Hacker News search API.
//!
//! These tests need network access and are gated behind the `e2e-tests`
//! feature flag.
//!
//! Run with: `cargo test --features e2e-tests`

#![cfg(feature = "e2e-tests")]

use hacker_stories::api::{HttpStoryClient, QueryUrlBuilder, StoryClient, DEFAULT_API_BASE};
use hacker_stories::model::{default_roster, SequentialIdAllocator};
use hacker_stories::persist::MemoryStore;
use hacker_stories::session::{SessionOptions, StoriesSession};
use hacker_stories::state::FetchStatus;
use std::time::Duration;
use tokio::runtime::Handle;

fn client() -> HttpStoryClient {
    HttpStoryClient::new(Duration::from_secs(20)).expect("HTTP client builds")
}

#[tokio::test]
async fn live_search_returns_requested_page() {
    let url = QueryUrlBuilder::new(DEFAULT_API_BASE)
        .expect("default base is valid")
        .build("rust", 1);

    let response = client().get(&url).await.expect("live API answers");

    assert_eq!(response.page, 1);
    assert!(!response.hits.is_empty(), "expected hits for 'rust'");
}

#[tokio::test]
async fn live_session_loads_two_pages() {
    let mut session = StoriesSession::new(
        client(),
        Box::new(MemoryStore::new()),
        Box::new(SequentialIdAllocator::default()),
        default_roster(),
        SessionOptions::default(),
        Handle::current(),
    )
    .expect("session builds");

    session.start().expect("default term is searchable");
    session.wait_idle().await;
    assert_eq!(session.status(), FetchStatus::Success);
    let first_page = session.stories().data.len();

    session.load_more().expect("a search is active");
    session.wait_idle().await;

    let state = session.stories();
    assert_eq!(state.page, 1);
    assert!(state.data.len() > first_page);
}

#[tokio::test]
async fn unknown_endpoint_surfaces_status_error() {
    let url = "https://hn.algolia.com/api/v1/no-such-endpoint?query=rust&page=0";

    let err = client().get(url).await.expect_err("404 is an error");

    assert!(err.to_string().contains("HTTP 404"), "got: {err}");
}
