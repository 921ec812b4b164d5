//! Configuration file loading for qa-session
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `QA_SESSION_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./qa-session.toml` or `./.qa-session.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/qa-session/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileConfig, FileLoggingConfig, FileQuestionsConfig, FileServerConfig,
    FileTransformConfig, Severity,
};
pub use loader::ConfigLoader;
