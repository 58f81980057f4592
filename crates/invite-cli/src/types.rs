use invite_model::InvitationOutcome;

/// What happened to one roster row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordReport {
    /// 1-based position among data rows.
    pub position: usize,
    /// Email attempted, when the row carried one.
    pub email: Option<String>,
    /// Terminal outcome; `None` when a dry run stopped before submission.
    pub outcome: Option<InvitationOutcome>,
}

/// Everything the batch produced, in input order.
#[derive(Debug, Default)]
pub struct BatchResult {
    pub reports: Vec<RecordReport>,
}

impl BatchResult {
    pub fn total(&self) -> usize {
        self.reports.len()
    }

    pub fn invited(&self) -> usize {
        self.count(|outcome| matches!(outcome, InvitationOutcome::Created))
    }

    pub fn already_registered(&self) -> usize {
        self.count(|outcome| matches!(outcome, InvitationOutcome::AlreadyExists))
    }

    pub fn rejected(&self) -> usize {
        self.count(|outcome| matches!(outcome, InvitationOutcome::RejectedLocally { .. }))
    }

    pub fn remote_failures(&self) -> usize {
        self.count(|outcome| matches!(outcome, InvitationOutcome::RemoteFailure { .. }))
    }

    pub fn transport_failures(&self) -> usize {
        self.count(|outcome| matches!(outcome, InvitationOutcome::TransportFailure { .. }))
    }

    /// Rows a dry run validated but never submitted.
    pub fn validated_only(&self) -> usize {
        self.reports
            .iter()
            .filter(|report| report.outcome.is_none())
            .count()
    }

    /// Reports whose outcome needs operator attention, in input order.
    pub fn failures(&self) -> impl Iterator<Item = &RecordReport> {
        self.reports.iter().filter(|report| {
            report
                .outcome
                .as_ref()
                .is_some_and(|outcome| !outcome.is_success())
        })
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }

    fn count(&self, matching: impl Fn(&InvitationOutcome) -> bool) -> usize {
        self.reports
            .iter()
            .filter(|report| report.outcome.as_ref().is_some_and(&matching))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(position: usize, outcome: Option<InvitationOutcome>) -> RecordReport {
        RecordReport {
            position,
            email: Some(format!("user{position}@example.com")),
            outcome,
        }
    }

    #[test]
    fn counts_group_by_outcome() {
        let result = BatchResult {
            reports: vec![
                report(1, Some(InvitationOutcome::Created)),
                report(2, Some(InvitationOutcome::AlreadyExists)),
                report(
                    3,
                    Some(InvitationOutcome::RejectedLocally {
                        position: 3,
                        reason: "missing required fields".to_string(),
                    }),
                ),
                report(
                    4,
                    Some(InvitationOutcome::RemoteFailure {
                        status: 500,
                        body: "boom".to_string(),
                    }),
                ),
                report(5, None),
            ],
        };
        assert_eq!(result.total(), 5);
        assert_eq!(result.invited(), 1);
        assert_eq!(result.already_registered(), 1);
        assert_eq!(result.rejected(), 1);
        assert_eq!(result.remote_failures(), 1);
        assert_eq!(result.transport_failures(), 0);
        assert_eq!(result.validated_only(), 1);
        assert!(result.has_failures());
        let failure_positions: Vec<usize> =
            result.failures().map(|report| report.position).collect();
        assert_eq!(failure_positions, vec![3, 4]);
    }
}
