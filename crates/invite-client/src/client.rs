//! Blocking HTTP client for the invitation endpoint.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use tracing::debug;

use invite_model::{InvitationOutcome, InvitationRequest, UserInvitation};

use crate::config::ApiConfig;
use crate::error::Result;

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Substring the API puts in 409 bodies for an address that is already
/// registered. A rephrased body classifies as a remote failure, never as a
/// success.
const ALREADY_EXISTS_MARKER: &str = "already_exists";

/// Client for `POST {base_url}/users`.
pub struct PachcaClient {
    client: Client,
    config: ApiConfig,
}

impl PachcaClient {
    /// Build a client with the default timeout and a static user agent.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("pachca-invite/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, config })
    }

    /// The invitation endpoint URL.
    fn users_url(&self) -> String {
        format!("{}/users", self.config.base_url())
    }

    /// Submit one invitation and classify the result.
    ///
    /// Exactly one POST per call, no retries. Transport problems come back as
    /// [`InvitationOutcome::TransportFailure`] rather than an error so the
    /// caller can carry on with the rest of the batch.
    pub fn send_invitation(&self, invitation: &UserInvitation) -> InvitationOutcome {
        let request = InvitationRequest { user: invitation };
        let response = self
            .client
            .post(self.users_url())
            .bearer_auth(self.config.token())
            .header(ACCEPT, "application/json")
            .json(&request)
            .send();
        let response = match response {
            Ok(response) => response,
            Err(err) => {
                return InvitationOutcome::TransportFailure {
                    message: err.to_string(),
                };
            }
        };
        let status = response.status().as_u16();
        debug!(status, email = %invitation.email, "invitation response");
        match response.text() {
            Ok(body) => classify_response(status, &body),
            Err(err) => InvitationOutcome::TransportFailure {
                message: err.to_string(),
            },
        }
    }
}

/// Map one response to an outcome: 200/201 mean created, a 409 whose body
/// carries [`ALREADY_EXISTS_MARKER`] means already registered, anything else
/// is a remote failure.
pub fn classify_response(status: u16, body: &str) -> InvitationOutcome {
    match status {
        200 | 201 => InvitationOutcome::Created,
        409 if body.contains(ALREADY_EXISTS_MARKER) => InvitationOutcome::AlreadyExists,
        _ => InvitationOutcome::RemoteFailure {
            status,
            body: body.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn users_url_joins_the_base() {
        let config = ApiConfig::new("https://api.pachca.com/api/shared/v1/", "token");
        let client = PachcaClient::new(config).expect("build client");
        assert_eq!(
            client.users_url(),
            "https://api.pachca.com/api/shared/v1/users"
        );
    }

    #[test]
    fn success_statuses_classify_as_created() {
        assert_eq!(classify_response(200, ""), InvitationOutcome::Created);
        assert_eq!(classify_response(201, "{}"), InvitationOutcome::Created);
    }

    #[test]
    fn conflict_with_marker_classifies_as_already_exists() {
        let body = r#"{"errors":[{"key":"email","code":"already_exists"}]}"#;
        assert_eq!(
            classify_response(409, body),
            InvitationOutcome::AlreadyExists
        );
    }

    #[test]
    fn bare_conflict_is_a_remote_failure() {
        assert_eq!(
            classify_response(409, "Conflict"),
            InvitationOutcome::RemoteFailure {
                status: 409,
                body: "Conflict".to_string(),
            }
        );
    }

    #[test]
    fn other_statuses_keep_status_and_body() {
        let outcome = classify_response(422, r#"{"errors":["role is invalid"]}"#);
        assert_eq!(
            outcome,
            InvitationOutcome::RemoteFailure {
                status: 422,
                body: r#"{"errors":["role is invalid"]}"#.to_string(),
            }
        );
    }
}
