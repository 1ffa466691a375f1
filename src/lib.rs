//! Hacker Stories
//!
//! Search, paginate and curate Hacker News stories from the terminal.
//!
//! Follows a Pure Core / Impure Shell split:
//! - pure core: `model`, `state`, and URL building in `api::url`
//! - impure shell: HTTP (`api::client`), fetching (`fetch`), persistence
//!   (`persist`), configuration, logging and the interactive `shell`
//!
//! [`session::StoriesSession`] ties the two together and is the surface a
//! front end drives.

pub mod api;
pub mod config;
pub mod fetch;
pub mod logging;
pub mod model;
pub mod persist;
pub mod session;
pub mod shell;
pub mod state;

#[cfg(test)]
mod test_harness;
