//! Append-only log of issued request URLs.
//!
//! Appending notifies every subscribed listener synchronously, in
//! subscription order. The log is the single trigger for fetching: nothing
//! else starts a request.

use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Reacts to URLs appended to a [`UrlLog`].
pub trait UrlLogListener: Send + Sync {
    /// Called once per append, after `url` is recorded.
    fn url_appended(&self, url: &str);
}

/// Ordered record of every search and "load more" request.
#[derive(Default)]
pub struct UrlLog {
    urls: Vec<String>,
    listeners: Vec<Arc<dyn UrlLogListener>>,
}

impl UrlLog {
    /// Empty log with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` for every subsequent append.
    pub fn subscribe(&mut self, listener: Arc<dyn UrlLogListener>) {
        self.listeners.push(listener);
    }

    /// Record `url` and notify listeners.
    pub fn append(&mut self, url: impl Into<String>) {
        let url = url.into();
        debug!(url = %url, position = self.urls.len(), "URL appended");
        self.urls.push(url);
        if let Some(url) = self.urls.last() {
            for listener in &self.listeners {
                listener.url_appended(url);
            }
        }
    }

    /// All URLs, oldest first.
    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    /// Most recently appended URL.
    pub fn last(&self) -> Option<&str> {
        self.urls.last().map(String::as_str)
    }

    /// Number of URLs appended so far.
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// Whether nothing has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

impl fmt::Debug for UrlLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UrlLog")
            .field("urls", &self.urls)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<String>>,
    }

    impl UrlLogListener for Recorder {
        fn url_appended(&self, url: &str) {
            self.seen.lock().push(url.to_string());
        }
    }

    #[test]
    fn append_keeps_order() {
        let mut log = UrlLog::new();
        log.append("a");
        log.append("b");
        log.append("a");

        assert_eq!(log.urls(), ["a", "b", "a"]);
        assert_eq!(log.last(), Some("a"));
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn new_log_is_empty() {
        let log = UrlLog::new();
        assert!(log.is_empty());
        assert_eq!(log.last(), None);
    }

    #[test]
    fn listener_is_notified_once_per_append() {
        let recorder = Arc::new(Recorder::default());
        let mut log = UrlLog::new();
        log.subscribe(recorder.clone());

        log.append("first");
        log.append("second");

        assert_eq!(*recorder.seen.lock(), vec!["first", "second"]);
    }

    #[test]
    fn appends_before_subscription_are_not_replayed() {
        let recorder = Arc::new(Recorder::default());
        let mut log = UrlLog::new();
        log.append("early");
        log.subscribe(recorder.clone());
        log.append("late");

        assert_eq!(*recorder.seen.lock(), vec!["late"]);
    }

    #[test]
    fn every_listener_is_notified() {
        let a = Arc::new(Recorder::default());
        let b = Arc::new(Recorder::default());
        let mut log = UrlLog::new();
        log.subscribe(a.clone());
        log.subscribe(b.clone());

        log.append("url");

        assert_eq!(a.seen.lock().len(), 1);
        assert_eq!(b.seen.lock().len(), 1);
    }
}
