use crate::record::RowRejection;

/// Terminal classification for one roster row.
///
/// Every data row ends in exactly one of these, in input order; no outcome
/// aborts the rest of the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvitationOutcome {
    /// The API accepted the invitation (HTTP 200 or 201).
    Created,
    /// The address is already registered; nothing to do.
    AlreadyExists,
    /// The row failed local validation and never left this machine.
    RejectedLocally { position: usize, reason: String },
    /// The API answered with a non-success status.
    RemoteFailure { status: u16, body: String },
    /// The request never completed (connect, TLS, timeout, body read).
    TransportFailure { message: String },
}

impl InvitationOutcome {
    /// True for outcomes that need no operator attention.
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            InvitationOutcome::Created | InvitationOutcome::AlreadyExists
        )
    }

    /// Short tag for logs and summary tables.
    pub fn label(&self) -> &'static str {
        match self {
            InvitationOutcome::Created => "invited",
            InvitationOutcome::AlreadyExists => "already registered",
            InvitationOutcome::RejectedLocally { .. } => "rejected",
            InvitationOutcome::RemoteFailure { .. } => "api error",
            InvitationOutcome::TransportFailure { .. } => "network error",
        }
    }
}

impl From<RowRejection> for InvitationOutcome {
    fn from(rejection: RowRejection) -> Self {
        InvitationOutcome::RejectedLocally {
            position: rejection.position,
            reason: rejection.reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_covers_created_and_already_exists() {
        assert!(InvitationOutcome::Created.is_success());
        assert!(InvitationOutcome::AlreadyExists.is_success());
        assert!(
            !InvitationOutcome::TransportFailure {
                message: "connection refused".to_string()
            }
            .is_success()
        );
    }

    #[test]
    fn rejection_converts_with_position_intact() {
        let rejection = RowRejection {
            position: 4,
            reason: "missing required fields (email, role, first_name, last_name)".to_string(),
        };
        let outcome = InvitationOutcome::from(rejection);
        assert_eq!(
            outcome,
            InvitationOutcome::RejectedLocally {
                position: 4,
                reason: "missing required fields (email, role, first_name, last_name)"
                    .to_string(),
            }
        );
        assert!(!outcome.is_success());
        assert_eq!(outcome.label(), "rejected");
    }
}
