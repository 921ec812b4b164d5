//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

/// Raw logging configuration from TOML
///
/// # Example
///
/// ```toml
/// [logging]
/// dir = "/var/log/qa-session"                     # daily rolling diagnostic log
/// event_log = "/var/log/qa-session/events.jsonl"  # session event log
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Directory for rolling diagnostic log files
    pub dir: Option<String>,
    /// Path of the JSONL session event log
    pub event_log: Option<String>,
}
