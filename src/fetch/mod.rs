//! Fetching (impure shell).
//!
//! - `url_log`: append-only request log that notifies listeners
//! - `store`: the single serialized stories state
//! - `orchestrator`: log listener that performs requests

pub mod orchestrator;
pub mod store;
pub mod url_log;

pub use orchestrator::{FetchOrchestrator, StalePolicy};
pub use store::Store;
pub use url_log::{UrlLog, UrlLogListener};
