//! CLI entrypoint for qa-session
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use qa_application::QaService;
use qa_infrastructure::{
    ConfigLoader, FileConfig, InMemorySessionStore, JsonlSessionEventLogger,
    PlaceholderTransformer, Severity,
};
use qa_presentation::{AppState, Cli, app, cancel_on_ctrl_c, serve};
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("failed to load configuration")?
    };
    apply_cli_overrides(&mut config, &cli);

    let _log_guard = init_tracing(cli.verbose, config.logging.dir.as_deref().map(Path::new))?;

    info!("Starting qa-session");

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Error => error!("{}", issue.message),
            Severity::Warning => warn!("{}", issue.message),
        }
    }
    if issues.iter().any(|i| i.severity == Severity::Error) {
        bail!("Invalid configuration, see errors above");
    }

    let (questions, _) = config.questions.to_question_set();
    let (params, _) = config.transform.to_transform_params();
    info!(
        "Seeding sessions with {} questions, transform timeout {:?}",
        questions.len(),
        params.timeout
    );

    // === Dependency Injection ===
    let store = Arc::new(InMemorySessionStore::new(questions));
    let transformer = Arc::new(PlaceholderTransformer::with_prefix(
        config.transform.placeholder_prefix.clone(),
    ));
    let mut service = QaService::new(store, transformer).with_params(params);

    if let Some(path) = &config.logging.event_log {
        match JsonlSessionEventLogger::new(path) {
            Some(logger) => {
                info!("Session events: {}", logger.path().display());
                service = service.with_event_logger(Arc::new(logger));
            }
            None => warn!("Session event log disabled, could not open {}", path),
        }
    }

    let address = config.server.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {}", address))?;

    let shutdown = CancellationToken::new();
    cancel_on_ctrl_c(shutdown.clone());

    serve(listener, app(AppState::new(service)), shutdown).await?;

    Ok(())
}

fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(host) = &cli.host {
        config.server.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(path) = &cli.event_log {
        config.logging.event_log = Some(path.display().to_string());
    }
    if let Some(dir) = &cli.log_dir {
        config.logging.dir = Some(dir.display().to_string());
    }
}

/// Initialize logging based on verbosity level, unless `RUST_LOG` is set.
///
/// With a log directory, output is also written to a daily rolling file;
/// the returned guard flushes it on drop.
fn init_tracing(verbose: u8, log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    match log_dir {
        Some(dir) => {
            let appender = log_file_appender(dir)?;
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(writer),
                )
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .init();
            Ok(None)
        }
    }
}

/// Daily rolling `qa-session.log` in `dir`, created if missing.
fn log_file_appender(dir: &Path) -> Result<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("qa-session.log")
        .build(dir)
        .with_context(|| format!("failed to initialize log directory {}", dir.display()))
}
