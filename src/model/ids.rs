//! Synthetic id allocation for locally created stories.

use crate::model::StoryId;
use std::sync::atomic::{AtomicU64, Ordering};

/// First synthetic id. Remote ids are well below this.
pub const DEFAULT_DUMMY_ID_SEED: u64 = 1_000_000_000;

/// Source of fresh [`StoryId`]s for stories that never came from the API.
pub trait IdAllocator: Send + Sync {
    /// Returns an id not handed out before by this allocator.
    fn next_id(&self) -> StoryId;
}

/// Monotonically increasing ids starting at a seed.
#[derive(Debug)]
pub struct SequentialIdAllocator {
    next: AtomicU64,
}

impl SequentialIdAllocator {
    /// Allocator whose first id is `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            next: AtomicU64::new(seed),
        }
    }
}

impl Default for SequentialIdAllocator {
    fn default() -> Self {
        Self::new(DEFAULT_DUMMY_ID_SEED)
    }
}

impl IdAllocator for SequentialIdAllocator {
    fn next_id(&self) -> StoryId {
        StoryId::new(self.next.fetch_add(1, Ordering::Relaxed))
    }
}
