use thiserror::Error;

/// Columns that must be present and non-empty for a row to be submitted.
pub const REQUIRED_FIELDS: [&str; 4] = ["email", "role", "first_name", "last_name"];

/// One data row from the roster, in input order.
///
/// `position` is 1-based and follows the input line numbering with the header
/// line not counted, so it stays stable even when the roster contains blank
/// lines. Lookup is by exact header name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRow {
    pub position: usize,
    fields: Vec<(String, String)>,
}

impl RosterRow {
    pub fn new(position: usize, fields: Vec<(String, String)>) -> Self {
        Self { position, fields }
    }

    /// Value under `name`, if the roster has that column.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(header, _)| header == name)
            .map(|(_, value)| value.as_str())
    }
}

/// A row that passed the required-field check.
///
/// Required values are stored trimmed. Optional values are carried exactly as
/// read; payload construction decides what a blank optional means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateUser {
    pub email: String,
    pub role: String,
    pub first_name: String,
    pub last_name: String,
    pub nickname: Option<String>,
    pub department: Option<String>,
    pub phone_number: Option<String>,
    pub title: Option<String>,
    /// Raw delimited tag cell, unparsed.
    pub tags: Option<String>,
}

/// Why a row was turned away before any network call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("row {position}: {reason}")]
pub struct RowRejection {
    /// 1-based roster position of the rejected row.
    pub position: usize,
    pub reason: String,
}

/// Check the required-field contract for one row.
///
/// A row qualifies when `email`, `role`, `first_name` and `last_name` are all
/// present and non-empty after trimming. Nothing deeper is checked here; the
/// remote API stays the authority on address syntax, role names and
/// duplicates.
pub fn validate_row(row: &RosterRow) -> Result<CandidateUser, RowRejection> {
    let incomplete = REQUIRED_FIELDS
        .iter()
        .any(|name| row.get(name).is_none_or(|value| value.trim().is_empty()));
    if incomplete {
        return Err(RowRejection {
            position: row.position,
            reason: format!("missing required fields ({})", REQUIRED_FIELDS.join(", ")),
        });
    }
    let required = |name: &str| row.get(name).unwrap_or("").trim().to_string();
    let optional = |name: &str| row.get(name).map(ToString::to_string);
    Ok(CandidateUser {
        email: required("email"),
        role: required("role"),
        first_name: required("first_name"),
        last_name: required("last_name"),
        nickname: optional("nickname"),
        department: optional("department"),
        phone_number: optional("phone_number"),
        title: optional("title"),
        tags: optional("tags"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(position: usize, cells: &[(&str, &str)]) -> RosterRow {
        RosterRow::new(
            position,
            cells
                .iter()
                .map(|&(header, value)| (header.to_string(), value.to_string()))
                .collect(),
        )
    }

    #[test]
    fn complete_row_passes() {
        let row = row(
            1,
            &[
                ("email", "ivan@example.com"),
                ("role", "user"),
                ("first_name", "Ivan"),
                ("last_name", "Petrov"),
            ],
        );
        let candidate = validate_row(&row).expect("valid row");
        assert_eq!(candidate.email, "ivan@example.com");
        assert_eq!(candidate.role, "user");
        assert!(candidate.nickname.is_none());
        assert!(candidate.tags.is_none());
    }

    #[test]
    fn absent_required_column_rejects() {
        let row = row(
            3,
            &[("email", "a@b.c"), ("role", "admin"), ("first_name", "A")],
        );
        let rejection = validate_row(&row).expect_err("missing last_name");
        assert_eq!(rejection.position, 3);
    }

    #[test]
    fn whitespace_only_required_field_rejects() {
        let row = row(
            2,
            &[
                ("email", "   "),
                ("role", "user"),
                ("first_name", "A"),
                ("last_name", "B"),
            ],
        );
        assert!(validate_row(&row).is_err());
    }

    #[test]
    fn rejection_reason_names_every_required_field() {
        let rejection = validate_row(&row(1, &[("email", "a@b.c")])).expect_err("incomplete");
        for name in REQUIRED_FIELDS {
            assert!(rejection.reason.contains(name), "reason lacks {name}");
        }
        assert_eq!(
            rejection.to_string(),
            "row 1: missing required fields (email, role, first_name, last_name)"
        );
    }

    #[test]
    fn required_values_are_trimmed() {
        let row = row(
            1,
            &[
                ("email", " pad@example.com "),
                ("role", "user"),
                ("first_name", "Pad"),
                ("last_name", "Ded"),
            ],
        );
        let candidate = validate_row(&row).expect("valid row");
        assert_eq!(candidate.email, "pad@example.com");
    }

    #[test]
    fn optional_values_are_carried_verbatim() {
        let row = row(
            1,
            &[
                ("email", "a@b.c"),
                ("role", "user"),
                ("first_name", "A"),
                ("last_name", "B"),
                ("nickname", ""),
                ("title", "Engineer"),
            ],
        );
        let candidate = validate_row(&row).expect("valid row");
        assert_eq!(candidate.nickname.as_deref(), Some(""));
        assert_eq!(candidate.title.as_deref(), Some("Engineer"));
        assert!(candidate.department.is_none());
    }
}
