//! HTTP GET collaborator used by the fetch orchestrator.

use crate::model::{FetchError, SearchResponse};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Fetches one page of search results.
///
/// The orchestrator only depends on this trait, so tests substitute scripted
/// clients for the network.
#[async_trait]
pub trait StoryClient: Send + Sync + 'static {
    /// GET `url` and decode the body as a [`SearchResponse`].
    async fn get(&self, url: &str) -> Result<SearchResponse, FetchError>;
}

/// [`StoryClient`] over `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpStoryClient {
    client: reqwest::Client,
}

impl HttpStoryClient {
    /// Client whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Transport` if the TLS backend cannot be initialized.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("hacker-stories/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Transport {
                url: String::new(),
                message: e.to_string(),
            })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl StoryClient for HttpStoryClient {
    async fn get(&self, url: &str) -> Result<SearchResponse, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| FetchError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        debug!(url, bytes = body.len(), "Search response received");

        serde_json::from_str(&body).map_err(|e| FetchError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}
