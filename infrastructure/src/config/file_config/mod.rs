//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into domain and
//! application types on demand.

mod logging;
mod questions;
mod server;
mod transform;

pub use logging::FileLoggingConfig;
pub use questions::FileQuestionsConfig;
pub use server::FileServerConfig;
pub use transform::FileTransformConfig;

use serde::{Deserialize, Serialize};

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: a default value is used instead.
    Warning,
}

/// A detected issue in the loaded configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    /// Dotted path of the offending key, e.g. `transform.on_failure`
    pub field: String,
    pub message: String,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP server settings
    pub server: FileServerConfig,
    /// Default question settings
    pub questions: FileQuestionsConfig,
    /// Answer transformation settings
    pub transform: FileTransformConfig,
    /// Log file settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        issues.extend(self.questions.to_question_set().1);
        issues.extend(self.transform.to_transform_params().1);

        if self.server.host.trim().is_empty() {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                field: "server.host".to_string(),
                message: "server.host must not be empty".to_string(),
            });
        }

        issues
    }
}
