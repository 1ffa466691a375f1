//! Recent-search history derived from the URL log.
//!
//! History is never stored. It is recomputed from the full log on every read:
//! 1. extract the search term of every URL, oldest first
//! 2. collapse runs of the same term (compared against the last kept term only)
//! 3. keep the last [`HISTORY_WINDOW`] terms
//! 4. drop the newest one, which is the search currently shown

use crate::api::extract_search_term;

/// Number of collapsed terms considered, including the active one.
pub const HISTORY_WINDOW: usize = 6;

/// Prior search terms worth offering as "jump back" buttons.
///
/// At most `HISTORY_WINDOW - 1` entries, oldest first. URLs without a search
/// term are skipped.
pub fn search_history<S: AsRef<str>>(urls: &[S]) -> Vec<String> {
    let mut collapsed: Vec<String> = Vec::new();
    for term in urls.iter().filter_map(|url| extract_search_term(url.as_ref())) {
        if collapsed.last() != Some(&term) {
            collapsed.push(term);
        }
    }

    let start = collapsed.len().saturating_sub(HISTORY_WINDOW);
    let mut window = collapsed.split_off(start);
    window.pop();
    window
}
