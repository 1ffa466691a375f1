//! Configuration module.
//!
//! Resolution order: Defaults → Config File → Env Vars → CLI Args.

pub mod loader;

pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    default_state_dir, load_config_file, load_config_with_precedence, merge_config,
    validate_config, ConfigError, ConfigFile, ResolvedConfig, DEFAULT_SEARCH_TERM,
};
