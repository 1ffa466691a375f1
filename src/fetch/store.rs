//! Owner of the single [`StoriesState`].
//!
//! Each dispatch is one atomic read-modify-write under the lock, so two
//! settling requests can never both start from the same prior state.

use crate::state::{reduce, StoriesAction, StoriesState};
use parking_lot::Mutex;
use tracing::trace;

/// Serialized holder of the stories state. Shared between the session and
/// in-flight requests.
#[derive(Debug, Default)]
pub struct Store {
    state: Mutex<StoriesState>,
}

impl Store {
    /// Store in the initial state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store starting from `state`.
    pub fn with_state(state: StoriesState) -> Self {
        Self {
            state: Mutex::new(state),
        }
    }

    /// Apply `action` and return the resulting state.
    pub fn dispatch(&self, action: StoriesAction) -> StoriesState {
        let mut guard = self.state.lock();
        trace!(action = ?action, "Dispatching");
        let next = reduce(&guard, action);
        *guard = next.clone();
        next
    }

    /// Read-only copy of the current state.
    pub fn snapshot(&self) -> StoriesState {
        self.state.lock().clone()
    }
}
