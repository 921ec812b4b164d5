//! Presentation layer for qa-session
//!
//! This crate contains the CLI definition and the HTTP/JSON API
//! that exposes the QA service.

pub mod cli;
pub mod http;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use http::{
    AppState, SharedState, app,
    error::ApiError,
    server::{cancel_on_ctrl_c, serve},
};
