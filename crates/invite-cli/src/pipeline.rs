//! The sequential invitation pipeline.
//!
//! Each roster row flows through the same stages in order:
//! 1. **Validate**: check the required-field contract
//! 2. **Build**: shape the JSON payload, dropping blank optionals
//! 3. **Submit**: one blocking POST (skipped on dry runs)
//! 4. **Report**: stdout line plus structured log entry
//!
//! One row at a time, one request in flight at most, no retries. A row's
//! failure is recorded and the loop moves on; only an unparseable roster
//! aborts the batch.

use std::time::Instant;

use anyhow::Result;
use tracing::{info, info_span};

use invite_client::PachcaClient;
use invite_ingest::RosterSource;
use invite_model::{InvitationOutcome, UserInvitation, validate_row};

use crate::report::report_record;
use crate::types::{BatchResult, RecordReport};

/// Drive every roster row to its outcome, reporting each record as soon as
/// that outcome is known.
///
/// On a dry run valid rows stop after payload construction and are recorded
/// without an outcome. Rows already reported stay reported when a later
/// roster record fails to parse.
pub fn run_batch(
    source: RosterSource,
    client: &PachcaClient,
    dry_run: bool,
) -> Result<BatchResult> {
    let span = info_span!("invite_batch", dry_run);
    let _guard = span.enter();
    let start = Instant::now();

    let mut result = BatchResult::default();
    for row in source {
        let row = row?;
        let report = match validate_row(&row) {
            Err(rejection) => RecordReport {
                position: row.position,
                email: row
                    .get("email")
                    .map(str::trim)
                    .filter(|value| !value.is_empty())
                    .map(ToString::to_string),
                outcome: Some(InvitationOutcome::from(rejection)),
            },
            Ok(candidate) => {
                let invitation = UserInvitation::from_candidate(candidate);
                let outcome = if dry_run {
                    None
                } else {
                    Some(client.send_invitation(&invitation))
                };
                RecordReport {
                    position: row.position,
                    email: Some(invitation.email),
                    outcome,
                }
            }
        };
        report_record(&report);
        result.reports.push(report);
    }

    info!(
        total = result.total(),
        invited = result.invited(),
        already_registered = result.already_registered(),
        rejected = result.rejected(),
        remote_failures = result.remote_failures(),
        transport_failures = result.transport_failures(),
        duration_ms = start.elapsed().as_millis() as u64,
        "batch complete"
    );
    Ok(result)
}
