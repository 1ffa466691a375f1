//! Stories state machine.
//!
//! `reduce` is the only way a [`StoriesState`] changes. It is a pure function
//! from (previous state, action) to a fresh state; the previous value is never
//! touched, so snapshots handed to readers stay valid.

use crate::model::{Story, StoryId};

/// Shown in place of the list while the last request has failed.
pub const FETCH_ERROR_MESSAGE: &str = "Something went wrong ...";

// ===== StoriesState =====

/// Fetched stories plus request lifecycle flags.
///
/// `data` keeps arrival order: page 0 first, later pages appended behind it,
/// locally added stories at the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoriesState {
    /// Accumulated stories, at most one per id.
    pub data: Vec<Story>,
    /// Zero-based index of the last successfully fetched page.
    pub page: u32,
    /// A request is in flight.
    pub is_loading: bool,
    /// The last request failed. Cleared by the next request.
    pub is_error: bool,
}

impl StoriesState {
    /// Named lifecycle state derived from the flags.
    ///
    /// A successful fetch that returned no hits has the same shape as the
    /// initial state and reports [`FetchStatus::Init`].
    pub fn status(&self) -> FetchStatus {
        if self.is_loading {
            FetchStatus::Loading
        } else if self.is_error {
            FetchStatus::Error
        } else if self.data.is_empty() && self.page == 0 {
            FetchStatus::Init
        } else {
            FetchStatus::Success
        }
    }

    /// Whether a story with `id` is in `data`.
    pub fn contains(&self, id: StoryId) -> bool {
        self.data.iter().any(|story| story.object_id == id)
    }
}

/// Lifecycle of the stories request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    /// Nothing fetched yet.
    Init,
    /// A request is in flight.
    Loading,
    /// The last request succeeded.
    Success,
    /// The last request failed; see [`FETCH_ERROR_MESSAGE`].
    Error,
}

// ===== StoriesAction =====

/// Everything that can happen to the stories state.
///
/// The set is closed: an action the reducer does not know cannot be
/// constructed, so there is no runtime "unknown action" branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoriesAction {
    /// A request was issued. Keeps current data visible.
    FetchInit,
    /// A request settled with `payload` for result page `page`.
    FetchSuccess {
        /// Stories on the fetched page.
        payload: Vec<Story>,
        /// Zero-based page index. Page 0 replaces `data`; later pages append.
        page: u32,
    },
    /// A request failed. Keeps current data.
    FetchFailure,
    /// Drop every story sharing this story's id.
    RemoveStory(Story),
    /// Append a story. The caller guarantees its id is not present yet.
    AddStory(Story),
}

// ===== Reducer =====

/// Apply `action` to `state`, returning the next state.
pub fn reduce(state: &StoriesState, action: StoriesAction) -> StoriesState {
    match action {
        StoriesAction::FetchInit => StoriesState {
            is_loading: true,
            is_error: false,
            ..state.clone()
        },
        StoriesAction::FetchSuccess { payload, page } => {
            let data = if page == 0 {
                payload
            } else {
                let mut data = Vec::with_capacity(state.data.len() + payload.len());
                data.extend_from_slice(&state.data);
                data.extend(payload);
                data
            };
            StoriesState {
                data,
                page,
                is_loading: false,
                is_error: false,
            }
        }
        StoriesAction::FetchFailure => StoriesState {
            is_loading: false,
            is_error: true,
            ..state.clone()
        },
        StoriesAction::RemoveStory(story) => StoriesState {
            data: state
                .data
                .iter()
                .filter(|s| s.object_id != story.object_id)
                .cloned()
                .collect(),
            ..state.clone()
        },
        StoriesAction::AddStory(story) => {
            let mut data = state.data.clone();
            data.push(story);
            StoriesState {
                data,
                ..state.clone()
            }
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "stories_tests.rs"]
mod tests;
