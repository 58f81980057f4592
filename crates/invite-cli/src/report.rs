//! Per-record reporting: one stdout line and one structured log entry.

use tracing::{error, info};

use invite_model::InvitationOutcome;

use crate::types::RecordReport;

/// Emit the console line and log entry for one record.
///
/// Called as soon as the record's outcome is known, so the operator watches
/// progress row by row. Successful and already-registered records log at
/// info; every failure logs at error. Lines go to stdout, keeping stderr for
/// diagnostics.
pub fn report_record(report: &RecordReport) {
    let position = report.position;
    let email = report.email.as_deref().unwrap_or("-");
    match &report.outcome {
        None => {
            println!("row {position}: {email} validated (dry run, not submitted)");
            info!(position, email, "validated, not submitted");
        }
        Some(InvitationOutcome::Created) => {
            println!("row {position}: invited {email}");
            info!(position, email, "user invited");
        }
        Some(InvitationOutcome::AlreadyExists) => {
            println!("row {position}: {email} already registered, invitation not required");
            info!(position, email, "user already registered");
        }
        Some(InvitationOutcome::RejectedLocally { reason, .. }) => {
            println!("row {position}: {reason}");
            error!(position, reason = %reason, "row rejected");
        }
        Some(InvitationOutcome::RemoteFailure { status, body }) => {
            println!("row {position}: API error for {email}: {status} {body}");
            error!(position, email, status, body = %body, "invitation failed");
        }
        Some(InvitationOutcome::TransportFailure { message }) => {
            println!("row {position}: network error for {email}: {message}");
            error!(position, email, message = %message, "network error");
        }
    }
}
