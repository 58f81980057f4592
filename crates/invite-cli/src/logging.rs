//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! Two sinks with different jobs:
//!
//! - A daily-rotating JSON-lines file that always records info and above.
//!   This is the durable per-record history the batch leaves behind.
//! - An optional stderr layer for diagnostics, enabled by `-v`/`-q` or
//!   `RUST_LOG` and formatted per `--log-format`.
//!
//! Stdout stays reserved for per-record report lines and the summary table.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    EnvFilter, Registry, fmt,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

/// File name prefix of the rotating batch log (`pachca-invite.<date>.log`).
const LOG_FILE_PREFIX: &str = "pachca-invite";

/// The durable log keeps info and above regardless of console verbosity.
const FILE_LEVEL: LevelFilter = LevelFilter::INFO;

/// Daily files kept before the oldest is pruned.
pub const DEFAULT_MAX_LOG_FILES: usize = 14;

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Stderr diagnostics level; `None` keeps the console layer off.
    pub console_level: Option<LevelFilter>,
    /// Let `RUST_LOG` drive the console filter when no verbosity flag is set.
    pub use_env_filter: bool,
    /// Console output format.
    pub format: LogFormat,
    /// ANSI colors on the console layer.
    pub with_ansi: bool,
    /// Directory receiving the rotating batch log.
    pub log_dir: PathBuf,
    /// Cap on retained daily log files.
    pub max_log_files: usize,
}

/// Console log format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable format with colors.
    #[default]
    Pretty,
    /// Compact single-line format.
    Compact,
    /// JSON format for machine parsing.
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            console_level: None,
            use_env_filter: true,
            format: LogFormat::default(),
            with_ansi: true,
            log_dir: PathBuf::from("."),
            max_log_files: DEFAULT_MAX_LOG_FILES,
        }
    }
}

/// Handle returned by [`init_logging`]. Dropping it flushes and stops the
/// file appender worker, so it must outlive the batch.
pub struct LoggerGuard {
    _worker: WorkerGuard,
}

/// Initialize the global tracing subscriber with the given configuration.
///
/// This should be called once at application startup.
///
/// # Errors
///
/// Returns an error if the log directory is unusable or a subscriber is
/// already installed.
pub fn init_logging(config: &LogConfig) -> Result<LoggerGuard> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("log")
        .max_log_files(config.max_log_files)
        .build(&config.log_dir)
        .with_context(|| format!("create log file in {}", config.log_dir.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();
    layers.push(
        fmt::layer()
            .json()
            .with_writer(writer)
            .with_ansi(false)
            .with_filter(FILE_LEVEL)
            .boxed(),
    );
    if let Some(filter) = console_filter(config) {
        layers.push(console_layer(config, filter));
    }
    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .context("install tracing subscriber")?;
    Ok(LoggerGuard { _worker: guard })
}

fn console_layer(config: &LogConfig, filter: EnvFilter) -> Box<dyn Layer<Registry> + Send + Sync> {
    match config.format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(io::stderr)
            .with_target(false)
            .with_filter(filter)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_writer(io::stderr)
            .with_ansi(config.with_ansi)
            .with_target(false)
            .without_time()
            .with_filter(filter)
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .with_writer(io::stderr)
            .with_ansi(config.with_ansi)
            .with_target(false)
            .without_time()
            .with_filter(filter)
            .boxed(),
    }
}

/// Decide what, if anything, reaches stderr. `RUST_LOG` wins when env
/// filtering is allowed; otherwise the configured level applies to our
/// crates with external crates capped at warn.
fn console_filter(config: &LogConfig) -> Option<EnvFilter> {
    if config.use_env_filter
        && let Ok(filter) = EnvFilter::try_from_default_env()
    {
        return Some(filter);
    }
    let level = config.console_level?;
    if level == LevelFilter::OFF {
        return None;
    }
    let level = level.to_string().to_lowercase();
    Some(EnvFilter::new(format!(
        "warn,invite_cli={level},invite_client={level},invite_ingest={level},invite_model={level}"
    )))
}
