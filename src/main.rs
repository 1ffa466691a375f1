//! Hacker Stories - Entry Point

use clap::Parser;
use hacker_stories::api::HttpStoryClient;
use hacker_stories::fetch::StalePolicy;
use hacker_stories::model::{default_roster, SequentialIdAllocator};
use hacker_stories::persist::{FileStore, KeyValueStore, MemoryStore};
use hacker_stories::session::{SessionOptions, StoriesSession};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::info;

/// Hacker Stories - search and page through Hacker News stories
#[derive(Parser, Debug)]
#[command(name = "hacker-stories")]
#[command(version)]
#[command(about = "Search, paginate and curate Hacker News stories from the terminal")]
pub struct Args {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Search API endpoint (overrides config and HACKER_STORIES_API_BASE)
    #[arg(long)]
    pub api_base: Option<String>,

    /// Search term used when none has been persisted yet
    #[arg(short, long)]
    pub search: Option<String>,

    /// Drop responses to requests that were superseded by a newer one
    #[arg(long)]
    pub discard_stale: bool,

    /// Keep the search term in memory only; nothing is written to the state directory
    #[arg(long)]
    pub ephemeral: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = hacker_stories::config::load_config_with_precedence(args.config.clone())?;
        let merged = hacker_stories::config::merge_config(config_file);
        let with_env = hacker_stories::config::apply_env_overrides(merged);

        // --discard-stale only overrides when set
        let stale_override = args.discard_stale.then_some(StalePolicy::Discard);

        hacker_stories::config::apply_cli_overrides(
            with_env,
            args.api_base.clone(),
            args.search.clone(),
            stale_override,
        )
    };
    hacker_stories::config::validate_config(&config)?;

    // Guard flushes the non-blocking writer on drop; keep it for the whole run.
    let _log_guard = hacker_stories::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        ephemeral = args.ephemeral,
        "Configuration loaded and resolved"
    );

    let client = HttpStoryClient::new(Duration::from_secs(config.request_timeout_secs))?;
    let storage: Box<dyn KeyValueStore> = if args.ephemeral {
        Box::new(MemoryStore::new())
    } else {
        Box::new(FileStore::new(&config.state_dir))
    };

    let mut session = StoriesSession::new(
        client,
        storage,
        Box::new(SequentialIdAllocator::new(config.dummy_id_seed)),
        default_roster(),
        SessionOptions::from(&config),
        Handle::current(),
    )?;
    session.start()?;

    hacker_stories::shell::run(&mut session, io::stdin().lock(), io::stdout()).await?;

    Ok(())
}
