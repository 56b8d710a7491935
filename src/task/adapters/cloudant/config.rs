//! Connection settings for the document store.

use crate::config::{ConfigError, DEFAULT_TIMEOUT};
use std::fmt;
use std::time::Duration;

/// HTTP basic credentials for the document store.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    username: String,
    password: String,
}

impl BasicCredentials {
    /// Creates a credential pair.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the user name.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Validated document store settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudantConfig {
    base_url: String,
    database: String,
    credentials: Option<BasicCredentials>,
    timeout: Duration,
}

impl CloudantConfig {
    /// Creates settings for `database` on the server at `base_url`.
    ///
    /// Trailing slashes are stripped from the URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyUrl`] or [`ConfigError::EmptyDatabase`]
    /// when either value is blank.
    pub fn new(
        base_url: impl Into<String>,
        database: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let raw_url = base_url.into();
        let trimmed_url = raw_url.trim().trim_end_matches('/');
        if trimmed_url.is_empty() {
            return Err(ConfigError::EmptyUrl);
        }
        let raw_database = database.into();
        let trimmed_database = raw_database.trim();
        if trimmed_database.is_empty() {
            return Err(ConfigError::EmptyDatabase);
        }

        Ok(Self {
            base_url: trimmed_url.to_owned(),
            database: trimmed_database.to_owned(),
            credentials: None,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Sets basic credentials.
    #[must_use]
    pub fn with_credentials(mut self, credentials: BasicCredentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the server base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the database name.
    #[must_use]
    pub fn database(&self) -> &str {
        &self.database
    }

    /// Returns the basic credentials, if any.
    #[must_use]
    pub const fn credentials(&self) -> Option<&BasicCredentials> {
        self.credentials.as_ref()
    }

    /// Returns the request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}
