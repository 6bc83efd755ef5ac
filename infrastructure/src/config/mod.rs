//! Configuration file loading for coaching-contact
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `COACHING_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./contact.toml` or `./.contact.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/coaching-contact/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, ConfigIssueCode, FileClientConfig, FileConfig, FileServerConfig, Severity,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
