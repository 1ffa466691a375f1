//! Line commands understood by the interactive shell.
//!
//! Commands represent user intent, not text. Parsing is pure; executing a
//! command against a session is the shell loop's job.

use crate::model::StoryId;
use crate::state::{SortKey, UnknownSortKey};
use thiserror::Error;

/// One user request typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Submit a search for the given term. `search` alone resubmits the typed term.
    Search(Option<String>),
    /// Update the search input without searching.
    Type(String),
    /// Load the next page of the current search.
    More,
    /// Remove the story with this id from the list.
    Remove(StoryId),
    /// Append a dummy story.
    Add,
    /// Show recent searches.
    History,
    /// Re-run the recent search at this 1-based position in `history`.
    Back(usize),
    /// Sort the list by a column; repeating the column flips direction.
    Sort(SortKey),
    /// Show the user list.
    Users,
    /// Move a user between 1-based positions.
    Move {
        /// Current position of the user.
        from: usize,
        /// Position the user ends up at.
        to: usize,
    },
    /// Print the story list.
    List,
    /// Print the command reference.
    Help,
    /// Leave the shell.
    Quit,
}

/// Input line that does not form a valid [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// First word is not a known command.
    #[error("Unknown command '{0}'. Type 'help' for a list of commands.")]
    Unknown(String),

    /// A required argument is absent.
    #[error("'{command}' needs {expected}")]
    MissingArgument {
        /// Command word as typed.
        command: &'static str,
        /// Description of the missing argument.
        expected: &'static str,
    },

    /// An argument is present but cannot be used.
    #[error("'{command}': {reason}")]
    InvalidArgument {
        /// Command word as typed.
        command: &'static str,
        /// Why the argument was rejected.
        reason: String,
    },

    /// `sort` was given an unknown column.
    #[error(transparent)]
    SortKey(#[from] UnknownSortKey),
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "search" | "s" => Command::Search((!rest.is_empty()).then(|| rest.to_string())),
        "type" | "t" => Command::Type(rest.to_string()),
        "more" | "m" => Command::More,
        "remove" | "rm" => {
            let id = required(rest, "remove", "a story id")?
                .parse::<StoryId>()
                .map_err(|e| CommandError::InvalidArgument {
                    command: "remove",
                    reason: e.to_string(),
                })?;
            Command::Remove(id)
        }
        "add" => Command::Add,
        "history" | "h" => Command::History,
        "back" | "b" => {
            let arg = required(rest, "back", "a history position")?;
            Command::Back(position(arg, "back")?)
        }
        "sort" => Command::Sort(required(rest, "sort", "a column")?.parse()?),
        "users" | "u" => Command::Users,
        "move" | "mv" => {
            let mut args = rest.split_whitespace();
            let (Some(from), Some(to), None) = (args.next(), args.next(), args.next()) else {
                return Err(CommandError::MissingArgument {
                    command: "move",
                    expected: "two positions",
                });
            };
            Command::Move {
                from: position(from, "move")?,
                to: position(to, "move")?,
            }
        }
        "list" | "ls" => Command::List,
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };

    Ok(Some(command))
}

fn required<'a>(
    rest: &'a str,
    command: &'static str,
    expected: &'static str,
) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument { command, expected })
    } else {
        Ok(rest)
    }
}

/// 1-based list position.
fn position(arg: &str, command: &'static str) -> Result<usize, CommandError> {
    match arg.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(CommandError::InvalidArgument {
            command,
            reason: format!("'{arg}' is not a position (1, 2, ...)"),
        }),
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
