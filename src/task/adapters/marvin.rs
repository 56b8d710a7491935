//! Client for the task service's HTTP API.
//!
//! Only the credentials check is used; task data is read from the synced
//! document store instead.

use std::fmt;
use std::time::Duration;

use thiserror::Error;
use tracing::debug;

/// Public API base URL.
pub const DEFAULT_API_BASE: &str = "https://serv.amazingmarvin.com/api";

/// Header carrying the full-access token.
pub const ACCESS_TOKEN_HEADER: &str = "X-Full-Access-Token";

/// Errors returned by the task API client.
#[derive(Debug, Error)]
pub enum MarvinApiError {
    /// No access token was configured.
    #[error("no task API access token configured; set FULL_ACCESS_TOKEN")]
    MissingToken,

    /// The API answered with a non-success status.
    #[error("task API rejected the credentials check with HTTP {status}")]
    Rejected {
        /// HTTP status code.
        status: u16,
    },

    /// The request could not be completed.
    #[error("task API request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Task API client holding a pass-through access token.
#[derive(Clone)]
pub struct MarvinApiClient {
    client: reqwest::Client,
    api_base: String,
    token: String,
}

impl MarvinApiClient {
    /// Creates a client for `api_base` authenticating with `access_token`.
    ///
    /// # Errors
    ///
    /// Returns [`MarvinApiError::MissingToken`] when no token is supplied and
    /// [`MarvinApiError::Transport`] when the HTTP client cannot be built.
    pub fn new(
        api_base: impl Into<String>,
        access_token: Option<&str>,
        timeout: Duration,
    ) -> Result<Self, MarvinApiError> {
        let token = access_token
            .filter(|value| !value.trim().is_empty())
            .ok_or(MarvinApiError::MissingToken)?
            .to_owned();
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_owned(),
            token,
        })
    }

    /// Verifies the access token against the API's test endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`MarvinApiError::Rejected`] on a non-success status and
    /// [`MarvinApiError::Transport`] when the request fails.
    pub async fn test_credentials(&self) -> Result<(), MarvinApiError> {
        let response = self
            .client
            .post(format!("{}/test", self.api_base))
            .header(ACCESS_TOKEN_HEADER, &self.token)
            .send()
            .await?;

        let status = response.status();
        debug!(status = status.as_u16(), "task API credentials check");
        if status.is_success() {
            Ok(())
        } else {
            Err(MarvinApiError::Rejected {
                status: status.as_u16(),
            })
        }
    }
}

impl fmt::Debug for MarvinApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarvinApiClient")
            .field("api_base", &self.api_base)
            .field("token", &"<redacted>")
            .finish_non_exhaustive()
    }
}
