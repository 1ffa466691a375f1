//! Column sort for the story list (pure).
//!
//! Sorting is a view concern: it produces a reordered copy for display and
//! never feeds back into [`StoriesState`](crate::state::StoriesState).

use crate::model::Story;
use std::fmt;
use std::str::FromStr;

/// Column the list is sorted by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Arrival order.
    #[default]
    None,
    /// Alphabetical by title.
    Title,
    /// Alphabetical by author.
    Author,
    /// Most comments first.
    Comments,
    /// Fewest points first.
    Points,
}

impl SortKey {
    /// Every key, in the order the sort bar lists them.
    pub const ALL: [SortKey; 5] = [
        SortKey::None,
        SortKey::Title,
        SortKey::Author,
        SortKey::Comments,
        SortKey::Points,
    ];

    /// Upper-case column label. Parsing accepts it in any case.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::None => "NONE",
            SortKey::Title => "TITLE",
            SortKey::Author => "AUTHOR",
            SortKey::Comments => "COMMENTS",
            SortKey::Points => "POINTS",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sort key name that matched no [`SortKey`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown sort key '{0}' (expected none, title, author, comments or points)")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownSortKey(s.to_string()))
    }
}

/// Active sort column and direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    /// Sorted column.
    pub key: SortKey,
    /// Reverse of the column's natural order.
    pub is_reverse: bool,
}

/// Select `key`. Selecting the active key again flips the direction.
pub fn handle_sort(state: SortState, key: SortKey) -> SortState {
    SortState {
        key,
        is_reverse: key == state.key && !state.is_reverse,
    }
}

/// Copy of `stories` ordered for display.
///
/// Ascending sorts are stable. The comments sort is an ascending sort reversed,
/// so equal counts come out in reverse arrival order.
pub fn sort_stories(stories: &[Story], sort: SortState) -> Vec<Story> {
    let mut sorted = stories.to_vec();
    match sort.key {
        SortKey::None => {}
        SortKey::Title => sorted.sort_by(|a, b| a.title.cmp(&b.title)),
        SortKey::Author => sorted.sort_by(|a, b| a.author.cmp(&b.author)),
        SortKey::Comments => {
            sorted.sort_by_key(|s| s.num_comments);
            sorted.reverse();
        }
        SortKey::Points => sorted.sort_by_key(|s| s.points),
    }

    if sort.is_reverse {
        sorted.reverse();
    }
    sorted
}
