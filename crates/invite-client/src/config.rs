//! API connection settings sourced from the environment.

use std::env;
use std::fmt;

use crate::error::{ClientError, Result};

/// Environment variable overriding the API root.
pub const API_URL_ENV: &str = "PACHCA_API_URL";

/// Environment variable holding the administrator bearer token.
pub const ADMIN_TOKEN_ENV: &str = "PACHCA_ADMIN_TOKEN";

/// API root used when [`API_URL_ENV`] is not set.
pub const DEFAULT_BASE_URL: &str = "https://api.pachca.com/api/shared/v1";

/// Endpoint and credential for the invitation API.
///
/// Immutable once built; the batch shares one copy. The token is deliberately
/// kept out of the `Debug` representation.
#[derive(Clone)]
pub struct ApiConfig {
    base_url: String,
    token: String,
}

impl ApiConfig {
    pub fn new(base_url: &str, token: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    /// Read settings from the environment, loading `.env` first when present.
    ///
    /// [`ADMIN_TOKEN_ENV`] is required; a blank value counts as missing. The
    /// URL falls back to [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let token = lookup(ADMIN_TOKEN_ENV)
            .filter(|value| !value.trim().is_empty())
            .ok_or(ClientError::MissingVar(ADMIN_TOKEN_ENV))?;
        let base_url = lookup(API_URL_ENV)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Ok(Self::new(&base_url, &token))
    }

    /// Replace the API root, e.g. with a command-line override.
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
