//! Blocking client for the Pachca user-invitation API.
//!
//! [`ApiConfig`] carries the endpoint and admin token, read from the
//! environment with `.env` support. [`PachcaClient`] performs exactly one
//! POST per invitation and folds every response into an
//! [`invite_model::InvitationOutcome`]. Transport problems are outcomes, not
//! errors, so a dead connection never stops a batch.

pub mod client;
pub mod config;
pub mod error;

pub use client::{PachcaClient, classify_response};
pub use config::{ADMIN_TOKEN_ENV, API_URL_ENV, ApiConfig, DEFAULT_BASE_URL};
pub use error::{ClientError, Result};
