use serde::Serialize;

use crate::record::CandidateUser;

/// JSON body for one invitation, shaped for `POST /users`.
///
/// Optional fields are omitted from the serialized object when the roster
/// left them blank. The API treats a present-but-empty value differently from
/// an absent one, so blanks never leak into the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserInvitation {
    pub email: String,
    pub role: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_tags: Option<Vec<String>>,
}

impl UserInvitation {
    /// Build the payload for a validated candidate: blank optionals are
    /// dropped and the raw tag cell is parsed into `list_tags`.
    pub fn from_candidate(candidate: CandidateUser) -> Self {
        let non_blank = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
        Self {
            email: candidate.email,
            role: candidate.role,
            first_name: candidate.first_name,
            last_name: candidate.last_name,
            nickname: non_blank(candidate.nickname),
            department: non_blank(candidate.department),
            phone_number: non_blank(candidate.phone_number),
            title: non_blank(candidate.title),
            list_tags: candidate.tags.as_deref().and_then(parse_tags),
        }
    }
}

/// Split a raw tag cell on `,` and `;`, trim each part and drop empties.
/// Returns `None` when nothing usable remains.
pub fn parse_tags(raw: &str) -> Option<Vec<String>> {
    let tags: Vec<String> = raw
        .split([',', ';'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(ToString::to_string)
        .collect();
    if tags.is_empty() { None } else { Some(tags) }
}

/// Request envelope: the API expects the invitation under a `user` key.
#[derive(Debug, Serialize)]
pub struct InvitationRequest<'a> {
    pub user: &'a UserInvitation,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate() -> CandidateUser {
        CandidateUser {
            email: "ivan@example.com".to_string(),
            role: "user".to_string(),
            first_name: "Ivan".to_string(),
            last_name: "Petrov".to_string(),
            nickname: None,
            department: None,
            phone_number: None,
            title: None,
            tags: None,
        }
    }

    #[test]
    fn parses_mixed_delimiters() {
        assert_eq!(
            parse_tags("a, b ;c"),
            Some(vec!["a".to_string(), "b".to_string(), "c".to_string()])
        );
    }

    #[test]
    fn tag_cell_with_no_usable_parts_yields_none() {
        assert_eq!(parse_tags(""), None);
        assert_eq!(parse_tags("  "), None);
        assert_eq!(parse_tags(" , ; ,"), None);
    }

    #[test]
    fn trailing_delimiters_are_dropped() {
        assert_eq!(
            parse_tags("x;y, "),
            Some(vec!["x".to_string(), "y".to_string()])
        );
    }

    #[test]
    fn blank_optionals_are_dropped_from_payload() {
        let mut candidate = candidate();
        candidate.nickname = Some("  ".to_string());
        candidate.department = Some(String::new());
        candidate.title = Some("Engineer".to_string());
        let invitation = UserInvitation::from_candidate(candidate);
        assert!(invitation.nickname.is_none());
        assert!(invitation.department.is_none());
        assert_eq!(invitation.title.as_deref(), Some("Engineer"));
    }

    #[test]
    fn serialized_payload_omits_absent_fields() {
        let invitation = UserInvitation::from_candidate(candidate());
        let value = serde_json::to_value(&invitation).expect("serialize invitation");
        let object = value.as_object().expect("json object");
        assert_eq!(object.len(), 4);
        assert!(object.contains_key("email"));
        assert!(!object.contains_key("nickname"));
        assert!(!object.contains_key("list_tags"));
    }

    #[test]
    fn request_wraps_payload_under_user_key() {
        let mut candidate = candidate();
        candidate.tags = Some("dev;qa".to_string());
        let invitation = UserInvitation::from_candidate(candidate);
        let request = InvitationRequest { user: &invitation };
        let value = serde_json::to_value(&request).expect("serialize request");
        assert_eq!(value["user"]["email"], "ivan@example.com");
        assert_eq!(
            value["user"]["list_tags"],
            serde_json::json!(["dev", "qa"])
        );
    }
}
