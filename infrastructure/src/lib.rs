//! Infrastructure layer for qa-session
//!
//! This crate contains adapters that implement the ports defined in the
//! domain and application layers, including configuration file loading.

pub mod config;
pub mod logging;
pub mod store;
pub mod transform;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, FileConfig, FileLoggingConfig, FileQuestionsConfig,
    FileServerConfig, FileTransformConfig, Severity,
};
pub use logging::JsonlSessionEventLogger;
pub use store::InMemorySessionStore;
pub use transform::{PLACEHOLDER_PREFIX, PlaceholderTransformer};
