//! Pachca batch-invitation CLI.

use clap::{ColorChoice, Parser};
use invite_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, LogFormatArg};
use crate::commands::run_invite;
use crate::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    let guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(error) => {
            eprintln!("error: failed to initialize logging: {error:#}");
            std::process::exit(1);
        }
    };
    // A completed batch exits 0 even when rows failed; the summary and log
    // carry the per-row verdicts. Only preconditions exit 1.
    let exit_code = match run_invite(&cli) {
        Ok(result) => {
            print_summary(&result, cli.dry_run);
            0
        }
        Err(error) => {
            let chain = format!("{error:#}");
            tracing::error!(error = %chain, "batch aborted");
            eprintln!("error: {chain}");
            1
        }
    };
    // The appender worker flushes on drop; process::exit skips destructors.
    drop(guard);
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        log_dir: cli.log_dir.clone(),
        ..LogConfig::default()
    };
    if cli.verbosity.is_present() {
        config.console_level = Some(cli.verbosity.tracing_level_filter());
        config.use_env_filter = false;
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => io::stderr().is_terminal(),
    };
    config
}
