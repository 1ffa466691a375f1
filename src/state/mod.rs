//! Story list state machine and derived views (pure).
//!
//! All state transitions are pure functions testable without I/O.

pub mod history;
pub mod reorder;
pub mod sort;
pub mod stories;

// Re-export for convenience
pub use history::{search_history, HISTORY_WINDOW};
pub use reorder::reorder;
pub use sort::{handle_sort, sort_stories, SortKey, SortState, UnknownSortKey};
pub use stories::{reduce, FetchStatus, StoriesAction, StoriesState, FETCH_ERROR_MESSAGE};
