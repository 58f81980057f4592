use anyhow::{Context, Result};
use tracing::{info, info_span};

use invite_cli::pipeline::run_batch;
use invite_cli::types::BatchResult;
use invite_client::{ApiConfig, PachcaClient};
use invite_ingest::RosterSource;

use crate::cli::Cli;

/// Run one invitation batch from parsed CLI arguments.
///
/// Configuration and roster problems are fatal and abort before any record
/// is processed; per-record failures are handled inside the pipeline.
pub fn run_invite(cli: &Cli) -> Result<BatchResult> {
    let span = info_span!("invite", roster = %cli.roster.display());
    let _guard = span.enter();

    let mut config = ApiConfig::from_env().context("load API configuration")?;
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url);
    }
    let client = PachcaClient::new(config).context("build API client")?;
    let source = RosterSource::open(&cli.roster)
        .with_context(|| format!("open roster {}", cli.roster.display()))?;
    info!(dry_run = cli.dry_run, columns = source.headers().len(), "roster opened");
    run_batch(source, &client, cli.dry_run)
}
