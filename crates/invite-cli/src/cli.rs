//! CLI argument definitions for the invitation batch tool.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "pachca-invite",
    version,
    about = "Batch-invite users to Pachca from a CSV roster",
    long_about = "Read a CSV roster, validate each row, and send one invitation per\n\
                  valid row to the Pachca admin API, reporting every row's outcome.\n\n\
                  Requires PACHCA_ADMIN_TOKEN in the environment or a .env file.\n\
                  PACHCA_API_URL overrides the default endpoint."
)]
pub struct Cli {
    /// Path to the CSV roster.
    #[arg(value_name = "ROSTER", default_value = "users.csv")]
    pub roster: PathBuf,

    /// API base URL (takes precedence over PACHCA_API_URL).
    #[arg(long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,

    /// Validate rows and build payloads without calling the API.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Adjust stderr diagnostics (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Stderr log format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Directory for the rotating batch log file.
    #[arg(long = "log-dir", value_name = "DIR", default_value = ".")]
    pub log_dir: PathBuf,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
