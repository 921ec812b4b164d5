//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for qa-session
#[derive(Parser, Debug)]
#[command(name = "qa-session")]
#[command(author, version, about = "HTTP service for short-lived question-answer sessions")]
#[command(long_about = r#"
qa-session serves question-answer sessions over HTTP/JSON.

Routes:
  GET  /new_session              Create a session seeded with the default questions
  GET  /qa?session_id=<id>       Fetch a session (unknown ids get a new session)
  POST /submit_answers           Transform and store primary answers
  GET  /health                   Liveness and session count

Configuration files are loaded from (in priority order):
1. QA_SESSION_* environment variables (e.g. QA_SESSION_SERVER__PORT=9000)
2. --config <path>                          Explicit config file
3. ./qa-session.toml                        Project-level config
4. ~/.config/qa-session/config.toml         Global config

Example:
  qa-session --port 8000 -v
  qa-session --config ./qa-session.toml --event-log ./events.jsonl
"#)]
pub struct Cli {
    /// Interface to bind (overrides [server] host)
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Port to bind (overrides [server] port)
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Append session events as JSONL to this file (overrides [logging] event_log)
    #[arg(long, value_name = "PATH")]
    pub event_log: Option<PathBuf>,

    /// Write daily rolling diagnostic logs into this directory (overrides [logging] dir)
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}
