//! Error types for hacker-stories.
//!
//! This module defines the error taxonomy using `thiserror` for structured error
//! handling. Errors compose via `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from the binary's main logic
//!   - [`ConfigError`](crate::config::ConfigError) - Config file read/parse failures
//!   - [`LoggingError`](crate::logging::LoggingError) - Tracing subscriber setup failures
//!   - [`SessionError`] - Rejected user commands (empty search term, nothing to page)
//!   - [`StoreError`] - Persisted search term could not be read or written
//!   - `std::io::Error` - stdin/stdout failures in the command loop
//!
//! # Recovery Strategy
//!
//! [`FetchError`] never reaches `AppError`. The fetch orchestrator collapses every
//! transport or decode failure into the state machine's failure transition, keeps
//! the previously fetched stories, and logs the details. The user retries by
//! searching again or loading more.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all fatal failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// A session operation failed in a way the command loop cannot absorb.
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// Persisted state could not be accessed.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// HTTP client construction failed.
    #[error("HTTP client error: {0}")]
    Client(#[from] FetchError),

    /// Terminal I/O failure in the command loop.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Failure of a single search request.
///
/// Carries a message instead of the underlying `reqwest`/`serde_json` error so
/// the type stays `Clone + PartialEq` and test doubles can construct it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Connection, TLS, timeout or other transport-level failure.
    #[error("Request to {url} failed: {message}")]
    Transport {
        /// Request URL.
        url: String,
        /// Transport error description.
        message: String,
    },

    /// Server answered with a non-success status code.
    #[error("Request to {url} returned HTTP {status}")]
    Status {
        /// Request URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// Response body was not a valid search response.
    #[error("Invalid response body from {url}: {message}")]
    Decode {
        /// Request URL.
        url: String,
        /// Decoder error description.
        message: String,
    },
}

/// Errors from the key-value persistence slot.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading a persisted value failed for a reason other than absence.
    #[error("Failed to read {path}: {source}")]
    Read {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Writing a persisted value failed.
    #[error("Failed to write {path}: {source}")]
    Write {
        /// File or directory that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Key cannot be mapped to a storage location.
    #[error("Invalid storage key: '{0}'")]
    InvalidKey(String),
}

/// Rejected inbound operations on a [`StoriesSession`](crate::session::StoriesSession).
#[derive(Debug, Error)]
pub enum SessionError {
    /// Submitting requires a non-blank search term.
    #[error("Search term cannot be empty")]
    EmptySearchTerm,

    /// "Load more" needs a previous search to continue.
    #[error("No search has been issued yet")]
    NoActiveSearch,

    /// The active search term could not be persisted.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The configured API endpoint cannot be used to build request URLs.
    #[error(transparent)]
    InvalidBaseUrl(#[from] crate::api::InvalidBaseUrl),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn fetch_error_status_display() {
        let err = FetchError::Status {
            url: "https://hn.algolia.com/api/v1/search?query=react&page=0".to_string(),
            status: 503,
        };
        let msg = err.to_string();
        assert!(msg.contains("HTTP 503"));
        assert!(msg.contains("query=react"));
    }

    #[test]
    fn fetch_error_decode_display() {
        let err = FetchError::Decode {
            url: "u".to_string(),
            message: "missing field `hits`".to_string(),
        };
        assert!(err.to_string().contains("missing field `hits`"));
    }

    #[test]
    fn store_error_write_display_includes_path() {
        let err = StoreError::Write {
            path: PathBuf::from("/tmp/state/search"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/state/search"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn session_error_store_is_transparent() {
        let err: SessionError = StoreError::InvalidKey("../x".to_string()).into();
        assert_eq!(err.to_string(), "Invalid storage key: '../x'");
    }

    #[test]
    fn app_error_from_session_error() {
        let app_err: AppError = SessionError::EmptySearchTerm.into();
        let msg = app_err.to_string();
        assert!(msg.contains("Session error"));
        assert!(msg.contains("Search term cannot be empty"));
    }

    #[test]
    fn app_error_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe broken");
        let app_err: AppError = io_err.into();
        let msg = app_err.to_string();
        assert!(msg.contains("Terminal error"));
        assert!(msg.contains("pipe broken"));
    }
}
