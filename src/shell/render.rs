//! Plain-text rendering of session views.
//!
//! Each function turns a snapshot into the exact text the shell prints, so
//! output can be snapshot-tested without a session or a terminal.

use crate::model::{Story, User};
use crate::state::{SortKey, SortState, StoriesState, FETCH_ERROR_MESSAGE};

/// The story list as shown after every command that can change it.
///
/// Mirrors the list screen: the error banner (if the last request failed),
/// then either the loading notice or the stories in display order.
pub fn render_stories(state: &StoriesState, stories: &[Story], sort: SortState) -> String {
    let mut lines = Vec::new();

    if state.is_error {
        lines.push(FETCH_ERROR_MESSAGE.to_string());
    }

    if state.is_loading {
        lines.push("Loading ...".to_string());
        return finish(lines);
    }

    if sort.key != SortKey::None {
        let direction = if sort.is_reverse { ", reversed" } else { "" };
        lines.push(format!("Sorted by {}{direction}", sort.key.label().to_lowercase()));
    }

    if stories.is_empty() {
        lines.push("No stories.".to_string());
    }

    for story in stories {
        lines.push(format!("[{}] {}", story.object_id, story.title));
        lines.push(format!(
            "    {} | {} comments | {} points | {}",
            story.author, story.num_comments, story.points, story.url
        ));
    }

    lines.push(format!(
        "{} stories, page {}. Type 'more' for the next page.",
        stories.len(),
        state.page
    ));
    finish(lines)
}

/// Numbered recent searches, oldest first, for `back <n>`.
pub fn render_history(history: &[String]) -> String {
    if history.is_empty() {
        return "No earlier searches.\n".to_string();
    }
    finish(numbered(history.iter().map(String::as_str)))
}

/// Numbered user roster, for `move <from> <to>`.
pub fn render_users(users: &[User]) -> String {
    if users.is_empty() {
        return "No users.\n".to_string();
    }
    let names: Vec<String> = users.iter().map(User::full_name).collect();
    finish(numbered(names.iter().map(String::as_str)))
}

/// Command reference.
pub fn render_help() -> String {
    HELP.to_string()
}

const HELP: &str = "\
Commands:
  search [term]      search for term (or the typed term) from page 0
  type <term>        change the search input without searching
  more               load the next page of the current search
  remove <id>        remove a story from the list
  add                append a dummy story
  history            list recent searches
  back <n>           search again for recent search n
  sort <column>      sort by none, title, author, comments or points
  users              list users
  move <from> <to>   move a user between positions
  list               show the story list
  help               show this help
  quit               exit
";

fn numbered<'a>(items: impl Iterator<Item = &'a str>) -> Vec<String> {
    items
        .enumerate()
        .map(|(i, item)| format!("{}. {item}", i + 1))
        .collect()
}

fn finish(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
