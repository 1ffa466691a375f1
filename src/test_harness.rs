//! Test harness for session and shell tests.
//!
//! Provides a scripted [`StoryClient`] and helpers for building sessions that
//! run against it on the test's tokio runtime.

use crate::api::{QueryUrlBuilder, StoryClient, DEFAULT_API_BASE};
use crate::model::{
    default_roster, FetchError, SearchResponse, SequentialIdAllocator, Story, StoryId,
};
use crate::persist::{KeyValueStore, MemoryStore};
use crate::session::{SessionOptions, StoriesSession};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::runtime::Handle;

pub type Outcome = Result<SearchResponse, FetchError>;

/// Client answering from a fixed URL → outcome table.
///
/// URLs without a scripted outcome fail with a transport error. Every request
/// is recorded so tests can assert on what was fetched.
#[derive(Default)]
pub struct ScriptedClient {
    responses: Mutex<HashMap<String, Outcome>>,
    requested: Arc<Mutex<Vec<String>>>,
}

impl ScriptedClient {
    /// Answer requests for (`term`, `page`) with `outcome`.
    pub fn respond(self, term: &str, page: u32, outcome: Outcome) -> Self {
        self.responses.lock().insert(url(term, page), outcome);
        self
    }

    /// Shared view of the URLs requested so far.
    pub fn requested(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.requested)
    }
}

#[async_trait]
impl StoryClient for ScriptedClient {
    async fn get(&self, url: &str) -> Result<SearchResponse, FetchError> {
        self.requested.lock().push(url.to_string());
        self.responses.lock().get(url).cloned().unwrap_or_else(|| {
            Err(FetchError::Transport {
                url: url.to_string(),
                message: "no response scripted".to_string(),
            })
        })
    }
}

/// Request URL for (`term`, `page`) against the default endpoint.
pub fn url(term: &str, page: u32) -> String {
    QueryUrlBuilder::new(DEFAULT_API_BASE)
        .expect("default base is valid")
        .build(term, page)
}

pub fn story(id: u64, title: &str) -> Story {
    Story {
        title: title.to_string(),
        ..Story::dummy(StoryId::new(id))
    }
}

/// Successful page of stories titled "Story <id>".
pub fn hits(ids: &[u64], page: u32) -> Outcome {
    let stories = ids
        .iter()
        .map(|id| story(*id, &format!("Story {id}")))
        .collect();
    Ok(SearchResponse::new(stories, page))
}

pub fn ids<C: StoryClient>(session: &StoriesSession<C>) -> Vec<u64> {
    session
        .stories()
        .data
        .iter()
        .map(|s| s.object_id.get())
        .collect()
}

/// Session with default options and the default roster. Must be called
/// from inside a tokio runtime.
pub fn session_with<S>(client: ScriptedClient, storage: S) -> StoriesSession<ScriptedClient>
where
    S: KeyValueStore + 'static,
{
    StoriesSession::new(
        client,
        Box::new(storage),
        Box::new(SequentialIdAllocator::default()),
        default_roster(),
        SessionOptions::default(),
        Handle::current(),
    )
    .expect("default options build a session")
}

pub fn session(client: ScriptedClient) -> StoriesSession<ScriptedClient> {
    session_with(client, MemoryStore::new())
}

/// Run `script` through the shell loop and return everything it printed.
pub async fn run_script(session: &mut StoriesSession<ScriptedClient>, script: &str) -> String {
    let mut output = Vec::new();
    crate::shell::run(session, script.as_bytes(), &mut output)
        .await
        .expect("shell loop succeeds on in-memory I/O");
    String::from_utf8(output).expect("shell output is UTF-8")
}
