//! Configuration file loading with precedence handling.

use crate::api::QueryUrlBuilder;
use crate::api::DEFAULT_API_BASE;
use crate::fetch::StalePolicy;
use crate::model::DEFAULT_DUMMY_ID_SEED;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Search term used when nothing has been persisted yet.
pub const DEFAULT_SEARCH_TERM: &str = "React";

/// Environment variable naming an explicit config file.
pub const ENV_CONFIG: &str = "HACKER_STORIES_CONFIG";

/// Environment variable overriding the API base URL.
pub const ENV_API_BASE: &str = "HACKER_STORIES_API_BASE";

/// Environment variable overriding the default search term.
pub const ENV_SEARCH: &str = "HACKER_STORIES_SEARCH";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A resolved value is unusable.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Config key.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/hacker-stories/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Search endpoint, e.g. "https://hn.algolia.com/api/v1/search".
    #[serde(default)]
    pub api_base_url: Option<String>,

    /// Search term used when none has been persisted.
    #[serde(default)]
    pub default_search_term: Option<String>,

    /// Directory holding the persisted search term.
    #[serde(default)]
    pub state_dir: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Per-request timeout in seconds.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// "deliver" or "discard" responses of superseded requests.
    #[serde(default)]
    pub stale_responses: Option<StalePolicy>,

    /// First id handed to locally added stories.
    #[serde(default)]
    pub dummy_id_seed: Option<u64>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Search endpoint.
    pub api_base_url: String,
    /// Search term used when none has been persisted.
    pub default_search_term: String,
    /// Directory holding the persisted search term.
    pub state_dir: PathBuf,
    /// Log file for tracing output.
    pub log_file_path: PathBuf,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Handling of responses to superseded requests.
    pub stale_responses: StalePolicy,
    /// First id handed to locally added stories.
    pub dummy_id_seed: u64,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.to_string(),
            default_search_term: DEFAULT_SEARCH_TERM.to_string(),
            state_dir: default_state_dir(),
            log_file_path: default_log_path(),
            request_timeout_secs: 10,
            stale_responses: StalePolicy::Deliver,
            dummy_id_seed: DEFAULT_DUMMY_ID_SEED,
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/hacker-stories/hacker-stories.log` on Linux, or the
/// platform equivalent. Falls back to the current directory if no state
/// directory can be determined.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("hacker-stories").join("hacker-stories.log")
    } else {
        PathBuf::from("hacker-stories.log")
    }
}

/// Resolve default directory for persisted values.
pub fn default_state_dir() -> PathBuf {
    match dirs::data_dir() {
        Some(data_dir) => data_dir.join("hacker-stories"),
        None => PathBuf::from(".hacker-stories"),
    }
}

/// Resolve default config file path.
///
/// Returns `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("hacker-stories").join("config.toml"))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `HACKER_STORIES_CONFIG` environment variable
/// 3. Default path `~/.config/hacker-stories/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        api_base_url: config.api_base_url.unwrap_or(defaults.api_base_url),
        default_search_term: config
            .default_search_term
            .unwrap_or(defaults.default_search_term),
        state_dir: config.state_dir.unwrap_or(defaults.state_dir),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        request_timeout_secs: config
            .request_timeout_secs
            .unwrap_or(defaults.request_timeout_secs),
        stale_responses: config.stale_responses.unwrap_or(defaults.stale_responses),
        dummy_id_seed: config.dummy_id_seed.unwrap_or(defaults.dummy_id_seed),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `HACKER_STORIES_API_BASE`: Override API base URL
/// - `HACKER_STORIES_SEARCH`: Override default search term
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(base) = std::env::var(ENV_API_BASE) {
        config.api_base_url = base;
    }

    if let Ok(term) = std::env::var(ENV_SEARCH) {
        config.default_search_term = term;
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    api_base_override: Option<String>,
    search_override: Option<String>,
    stale_override: Option<StalePolicy>,
) -> ResolvedConfig {
    if let Some(base) = api_base_override {
        config.api_base_url = base;
    }

    if let Some(term) = search_override {
        config.default_search_term = term;
    }

    if let Some(policy) = stale_override {
        config.stale_responses = policy;
    }

    config
}

/// Reject resolved values the session cannot start with.
pub fn validate_config(config: &ResolvedConfig) -> Result<(), ConfigError> {
    if let Err(e) = QueryUrlBuilder::new(&config.api_base_url) {
        return Err(ConfigError::InvalidValue {
            field: "api_base_url",
            reason: e.to_string(),
        });
    }

    if config.default_search_term.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "default_search_term",
            reason: "must not be empty".to_string(),
        });
    }

    if config.request_timeout_secs == 0 {
        return Err(ConfigError::InvalidValue {
            field: "request_timeout_secs",
            reason: "must be at least 1".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
