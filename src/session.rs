//! Stories session: the inbound/outbound surface a front end drives.
//!
//! A session owns the request URL log, the stories store, the persisted search
//! term, the user roster and the sort selection. Commands append to the URL log;
//! the fetch orchestrator is subscribed to it and turns every appended URL into
//! a request. Everything a front end renders is read back through the outbound
//! accessors, which return snapshots.

use crate::api::{extract_page, extract_search_term, QueryUrlBuilder, StoryClient};
use crate::config::ResolvedConfig;
use crate::fetch::{FetchOrchestrator, StalePolicy, Store, UrlLog, UrlLogListener};
use crate::model::{IdAllocator, SessionError, Story, StoryId, User};
use crate::persist::{KeyValueStore, PersistedValue, SEARCH_TERM_KEY};
use crate::state::{
    handle_sort, reorder, search_history, sort_stories, FetchStatus, SortKey, SortState,
    StoriesAction, StoriesState,
};
use std::sync::Arc;
use tokio::runtime::Handle;
use tracing::{debug, info};

// ===== SessionOptions =====

/// Resolved settings a session is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Search endpoint every request URL is built against.
    pub api_base_url: String,
    /// Term used when nothing usable is persisted.
    pub default_search_term: String,
    /// What to do with responses to superseded requests.
    pub stale_responses: StalePolicy,
}

impl From<&ResolvedConfig> for SessionOptions {
    fn from(config: &ResolvedConfig) -> Self {
        Self {
            api_base_url: config.api_base_url.clone(),
            default_search_term: config.default_search_term.clone(),
            stale_responses: config.stale_responses,
        }
    }
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self::from(&ResolvedConfig::default())
    }
}

// ===== StoriesSession =====

/// One user's view of the stories: search, paging, local edits, users and
/// sorting over a single stories store.
///
/// Must be created from inside a tokio runtime whose [`Handle`] is passed in;
/// requests run as tasks on it.
pub struct StoriesSession<C: StoryClient> {
    urls: QueryUrlBuilder,
    url_log: UrlLog,
    store: Arc<Store>,
    orchestrator: Arc<FetchOrchestrator<C>>,
    search_term: PersistedValue,
    ids: Box<dyn IdAllocator>,
    users: Vec<User>,
    sort: SortState,
}

impl<C: StoryClient> StoriesSession<C> {
    /// Build a session. No request is issued until [`start`](Self::start).
    ///
    /// The search term is read from `storage`, falling back to
    /// `options.default_search_term` when nothing usable is stored.
    pub fn new(
        client: C,
        storage: Box<dyn KeyValueStore>,
        ids: Box<dyn IdAllocator>,
        users: Vec<User>,
        options: SessionOptions,
        runtime: Handle,
    ) -> Result<Self, SessionError> {
        let urls = QueryUrlBuilder::new(&options.api_base_url)?;
        let search_term =
            PersistedValue::load(storage, SEARCH_TERM_KEY, options.default_search_term)?;

        let store = Arc::new(Store::new());
        let orchestrator = Arc::new(FetchOrchestrator::new(
            client,
            Arc::clone(&store),
            options.stale_responses,
            runtime,
        ));
        let listener: Arc<dyn UrlLogListener> = orchestrator.clone();
        let mut url_log = UrlLog::new();
        url_log.subscribe(listener);

        debug!(
            base = urls.base(),
            search_term = search_term.get(),
            policy = %options.stale_responses,
            "Session created"
        );

        Ok(Self {
            urls,
            url_log,
            store,
            orchestrator,
            search_term,
            ids,
            users,
            sort: SortState::default(),
        })
    }

    /// Issue the initial search for the current (persisted or default) term.
    pub fn start(&mut self) -> Result<(), SessionError> {
        let term = non_blank(self.search_term.get())?.to_string();
        self.issue(&term, 0);
        Ok(())
    }

    // ===== Inbound =====

    /// Change the search term without searching. The new term is persisted.
    pub fn set_search_term(&mut self, term: &str) -> Result<(), SessionError> {
        self.search_term.set(term)?;
        Ok(())
    }

    /// Search for `term` from the first result page.
    ///
    /// The term becomes the current search term and is persisted before the
    /// request is issued. Blank terms are rejected and nothing changes.
    pub fn submit_search(&mut self, term: &str) -> Result<(), SessionError> {
        let term = non_blank(term)?;
        self.search_term.set(term)?;
        self.issue(term, 0);
        Ok(())
    }

    /// Re-run a search picked from [`search_history`](Self::search_history).
    pub fn search_last(&mut self, term: &str) -> Result<(), SessionError> {
        self.submit_search(term)
    }

    /// Request the page after the last one asked for in the most recent search.
    ///
    /// Term and page both come from the last issued URL, not from the current
    /// input, so editing the input without submitting does not change what
    /// "more" loads. If that request failed, the same page is asked for again:
    /// a failed first page of a new search is retried rather than skipped.
    pub fn load_more(&mut self) -> Result<(), SessionError> {
        let last = self.url_log.last().ok_or(SessionError::NoActiveSearch)?;
        let (term, last_page) = extract_search_term(last)
            .zip(extract_page(last))
            .ok_or(SessionError::NoActiveSearch)?;
        let page = if self.store.snapshot().is_error {
            last_page
        } else {
            last_page.saturating_add(1)
        };
        debug!(term = %term, page, "Loading more");
        self.issue(&term, page);
        Ok(())
    }

    /// Remove every story sharing `story`'s id.
    pub fn remove_story(&self, story: &Story) {
        self.store.dispatch(StoriesAction::RemoveStory(story.clone()));
    }

    /// Append a placeholder story under a freshly allocated id.
    ///
    /// Ids already present in the list are skipped, so the added story never
    /// collides with a fetched one.
    pub fn add_dummy_story(&self) -> Story {
        let state = self.store.snapshot();
        let id = loop {
            let id = self.ids.next_id();
            if !state.contains(id) {
                break id;
            }
        };
        let story = Story::dummy(id);
        self.store.dispatch(StoriesAction::AddStory(story.clone()));
        info!(id = %id, "Dummy story added");
        story
    }

    /// Move the user at `from` to position `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds for [`users`](Self::users).
    pub fn reorder_users(&mut self, from: usize, to: usize) {
        self.users = reorder(&self.users, from, to);
    }

    /// Select a sort column. Selecting the active column again flips direction.
    pub fn sort_by(&mut self, key: SortKey) {
        self.sort = handle_sort(self.sort, key);
    }

    /// Wait until every request issued so far has settled.
    pub async fn wait_idle(&self) {
        self.orchestrator.wait_idle().await;
    }

    // ===== Outbound =====

    /// Snapshot of the stories state.
    pub fn stories(&self) -> StoriesState {
        self.store.snapshot()
    }

    /// Stories in display order for the current sort selection.
    pub fn sorted_stories(&self) -> Vec<Story> {
        sort_stories(&self.store.snapshot().data, self.sort)
    }

    /// Lifecycle status of the most recent fetch.
    pub fn status(&self) -> FetchStatus {
        self.store.snapshot().status()
    }

    /// Recent distinct searches, oldest first, excluding the current one.
    pub fn search_history(&self) -> Vec<String> {
        search_history(self.url_log.urls())
    }

    /// Current search term, as typed or persisted.
    pub fn search_term(&self) -> &str {
        self.search_term.get()
    }

    /// User roster in display order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Active sort selection.
    pub fn sort(&self) -> SortState {
        self.sort
    }

    /// Every request URL issued so far, oldest first.
    pub fn urls(&self) -> &[String] {
        self.url_log.urls()
    }

    /// Whether a story with `id` is currently listed.
    pub fn contains(&self, id: StoryId) -> bool {
        self.store.snapshot().contains(id)
    }

    fn issue(&mut self, term: &str, page: u32) {
        let url = self.urls.build(term, page);
        self.url_log.append(url);
    }
}

fn non_blank(term: &str) -> Result<&str, SessionError> {
    if term.trim().is_empty() {
        Err(SessionError::EmptySearchTerm)
    } else {
        Ok(term)
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
