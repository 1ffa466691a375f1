//! Interactive line shell (impure shell).
//!
//! Reads one command per line, applies it to a [`StoriesSession`], waits for
//! any request it triggered to settle, then prints the affected view.
//!
//! - `command`: pure line parsing
//! - `render`: pure text rendering

pub mod command;
pub mod render;

pub use command::{parse_command, Command, CommandError};

use crate::api::StoryClient;
use crate::model::{AppError, SessionError};
use crate::session::StoriesSession;
use render::{render_help, render_history, render_stories, render_users};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// Whether the loop keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Drive `session` from `input` until end of input or `quit`.
///
/// Prints the story list once up front, after whatever request `start`
/// issued has settled. Rejected commands are reported on `output` and the
/// loop continues; only I/O failures end it early.
pub async fn run<C, R, W>(
    session: &mut StoriesSession<C>,
    input: R,
    mut output: W,
) -> Result<(), AppError>
where
    C: StoryClient,
    R: BufRead,
    W: Write,
{
    show_stories(session, &mut output).await?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(output, "{e}")?;
                continue;
            }
        };

        debug!(?command, "Executing command");
        let flow = execute(session, command, &mut output).await?;
        output.flush()?;
        if flow == Flow::Quit {
            break;
        }
    }

    info!("Shell finished");
    Ok(())
}

async fn execute<C, W>(
    session: &mut StoriesSession<C>,
    command: Command,
    output: &mut W,
) -> Result<Flow, AppError>
where
    C: StoryClient,
    W: Write,
{
    match command {
        Command::Search(term) => {
            let term = term.unwrap_or_else(|| session.search_term().to_string());
            let result = session.submit_search(&term);
            after(result, session, output).await?;
        }
        Command::Type(term) => match session.set_search_term(&term) {
            Ok(()) => writeln!(output, "Search term: {}", session.search_term())?,
            Err(e) => reject(e, output)?,
        },
        Command::More => {
            let result = session.load_more();
            after(result, session, output).await?;
        }
        Command::Remove(id) => {
            let story = session.stories().data.into_iter().find(|s| s.object_id == id);
            match story {
                Some(story) => {
                    session.remove_story(&story);
                    show_stories(session, output).await?;
                }
                None => writeln!(output, "No story with id {id}")?,
            }
        }
        Command::Add => {
            let story = session.add_dummy_story();
            writeln!(output, "Added story {}", story.object_id)?;
            show_stories(session, output).await?;
        }
        Command::History => write!(output, "{}", render_history(&session.search_history()))?,
        Command::Back(position) => {
            let history = session.search_history();
            match history.get(position - 1) {
                Some(term) => {
                    let result = session.search_last(term);
                    after(result, session, output).await?;
                }
                None => writeln!(output, "No recent search at position {position}")?,
            }
        }
        Command::Sort(key) => {
            session.sort_by(key);
            show_stories(session, output).await?;
        }
        Command::Users => write!(output, "{}", render_users(session.users()))?,
        Command::Move { from, to } => {
            let len = session.users().len();
            if from > len || to > len {
                writeln!(output, "Positions must be between 1 and {len}")?;
            } else {
                session.reorder_users(from - 1, to - 1);
                write!(output, "{}", render_users(session.users()))?;
            }
        }
        Command::List => show_stories(session, output).await?,
        Command::Help => write!(output, "{}", render_help())?,
        Command::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

/// Show the list if the command was accepted, otherwise say why not.
async fn after<C, W>(
    result: Result<(), SessionError>,
    session: &StoriesSession<C>,
    output: &mut W,
) -> Result<(), AppError>
where
    C: StoryClient,
    W: Write,
{
    match result {
        Ok(()) => show_stories(session, output).await,
        Err(e) => reject(e, output),
    }
}

fn reject<W: Write>(error: SessionError, output: &mut W) -> Result<(), AppError> {
    warn!(error = %error, "Command rejected");
    writeln!(output, "{error}")?;
    Ok(())
}

async fn show_stories<C, W>(session: &StoriesSession<C>, output: &mut W) -> Result<(), AppError>
where
    C: StoryClient,
    W: Write,
{
    session.wait_idle().await;
    let state = session.stories();
    let text = render_stories(&state, &session.sorted_stories(), session.sort());
    write!(output, "{text}")?;
    Ok(())
}

#[cfg(test)]
#[path = "shell_tests.rs"]
mod tests;
