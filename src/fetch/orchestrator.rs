//! Turns URL-log appends into requests and request outcomes into actions.
//!
//! For every appended URL the orchestrator dispatches `FetchInit` right away,
//! spawns one request on the tokio runtime, and dispatches exactly one of
//! `FetchSuccess` / `FetchFailure` when it settles. Superseded requests are
//! not cancelled. With [`StalePolicy::Deliver`] their outcome is applied when
//! it arrives, so a slow earlier request can overwrite a faster later one.

use crate::api::StoryClient;
use crate::fetch::store::Store;
use crate::fetch::url_log::UrlLogListener;
use crate::state::StoriesAction;
use parking_lot::Mutex;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

/// What to do with a response whose request has been superseded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StalePolicy {
    /// Apply it anyway.
    #[default]
    Deliver,
    /// Drop it; only the newest request may settle the state.
    Discard,
}

impl fmt::Display for StalePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StalePolicy::Deliver => f.write_str("deliver"),
            StalePolicy::Discard => f.write_str("discard"),
        }
    }
}

impl FromStr for StalePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deliver" => Ok(StalePolicy::Deliver),
            "discard" => Ok(StalePolicy::Discard),
            other => Err(format!(
                "unknown stale response policy '{other}' (expected deliver or discard)"
            )),
        }
    }
}

/// Performs one request per logged URL and feeds the outcome to the store.
///
/// Subscribed to a [`UrlLog`](crate::fetch::UrlLog) as a listener.
pub struct FetchOrchestrator<C: StoryClient> {
    client: Arc<C>,
    store: Arc<Store>,
    policy: StalePolicy,
    generation: Arc<AtomicU64>,
    in_flight: Mutex<Vec<JoinHandle<()>>>,
    runtime: Handle,
}

impl<C: StoryClient> FetchOrchestrator<C> {
    /// Orchestrator fetching through `client` on `runtime` and dispatching
    /// into `store`.
    pub fn new(client: C, store: Arc<Store>, policy: StalePolicy, runtime: Handle) -> Self {
        Self {
            client: Arc::new(client),
            store,
            policy,
            generation: Arc::new(AtomicU64::new(0)),
            in_flight: Mutex::new(Vec::new()),
            runtime,
        }
    }

    /// Start fetching `url`.
    pub fn request(&self, url: &str) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.store.dispatch(StoriesAction::FetchInit);
        info!(url, generation, "Fetching stories");

        let client = Arc::clone(&self.client);
        let store = Arc::clone(&self.store);
        let latest = Arc::clone(&self.generation);
        let policy = self.policy;
        let url = url.to_string();

        let handle = self.runtime.spawn(async move {
            let outcome = client.get(&url).await;

            if policy == StalePolicy::Discard && latest.load(Ordering::SeqCst) != generation {
                debug!(url = %url, generation, "Discarding stale response");
                return;
            }

            match outcome {
                Ok(response) => {
                    debug!(url = %url, hits = response.hits.len(), page = response.page, "Fetch succeeded");
                    store.dispatch(StoriesAction::FetchSuccess {
                        payload: response.hits,
                        page: response.page,
                    });
                }
                Err(e) => {
                    warn!(error = %e, "Fetch failed");
                    store.dispatch(StoriesAction::FetchFailure);
                }
            }
        });

        let mut in_flight = self.in_flight.lock();
        in_flight.retain(|h| !h.is_finished());
        in_flight.push(handle);
    }

    /// Wait until every request issued so far has settled.
    pub async fn wait_idle(&self) {
        loop {
            let pending = std::mem::take(&mut *self.in_flight.lock());
            if pending.is_empty() {
                return;
            }
            for handle in pending {
                if let Err(e) = handle.await {
                    error!(error = %e, "Fetch task aborted");
                }
            }
        }
    }
}

impl<C: StoryClient> UrlLogListener for FetchOrchestrator<C> {
    fn url_appended(&self, url: &str) {
        self.request(url);
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
