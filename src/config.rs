//! Process configuration for the document store and task API.
//!
//! Configuration is read once at startup into explicit value objects that
//! are handed to adapter constructors. Empty variables count as absent.
//!
//! | Variable | Required |
//! |---|---|
//! | `CLOUDANT_URL` | yes |
//! | `CLOUDANT_SYNC_DB` | yes |
//! | `CLOUDANT_USERNAME`, `CLOUDANT_PASSWORD` | together or not at all |
//! | `CLOUDANT_TIMEOUT_SECONDS` | no, defaults to 30 |
//! | `FULL_ACCESS_TOKEN` | no |
//! | `MARVIN_API_BASE` | no |

use crate::task::adapters::cloudant::{BasicCredentials, CloudantConfig};
use crate::task::adapters::marvin::DEFAULT_API_BASE;
use std::time::Duration;
use thiserror::Error;

/// Document store base URL.
pub const CLOUDANT_URL: &str = "CLOUDANT_URL";
/// Document store database name.
pub const CLOUDANT_SYNC_DB: &str = "CLOUDANT_SYNC_DB";
/// Document store user name.
pub const CLOUDANT_USERNAME: &str = "CLOUDANT_USERNAME";
/// Document store password.
pub const CLOUDANT_PASSWORD: &str = "CLOUDANT_PASSWORD";
/// Document store request timeout in seconds.
pub const CLOUDANT_TIMEOUT_SECONDS: &str = "CLOUDANT_TIMEOUT_SECONDS";
/// Task API access token.
pub const FULL_ACCESS_TOKEN: &str = "FULL_ACCESS_TOKEN";
/// Task API base URL.
pub const MARVIN_API_BASE: &str = "MARVIN_API_BASE";

/// Default HTTP timeout for document store requests.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors raised while validating configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is absent or empty.
    #[error("{name} environment variable was not found; set it to {purpose}")]
    MissingVariable {
        /// Variable name.
        name: &'static str,
        /// What the variable should contain.
        purpose: &'static str,
    },

    /// A variable holds a value that cannot be parsed.
    #[error("{name} has invalid value '{value}': {reason}")]
    InvalidValue {
        /// Variable name.
        name: &'static str,
        /// Offending value.
        value: String,
        /// Parse failure.
        reason: String,
    },

    /// Only one half of the basic credentials was supplied.
    #[error("CLOUDANT_USERNAME and CLOUDANT_PASSWORD must be set together")]
    IncompleteCredentials,

    /// The database name is blank.
    #[error("document store database name must not be empty")]
    EmptyDatabase,

    /// The base URL is blank.
    #[error("document store URL must not be empty")]
    EmptyUrl,
}

/// Task API settings. The token is optional and only passed through.
#[derive(Clone, PartialEq, Eq)]
pub struct MarvinSettings {
    api_base: String,
    token: Option<String>,
}

impl MarvinSettings {
    /// Reads task API settings through `lookup`.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            api_base: read(&lookup, MARVIN_API_BASE).unwrap_or_else(|| DEFAULT_API_BASE.to_owned()),
            token: read(&lookup, FULL_ACCESS_TOKEN),
        }
    }

    /// Reads task API settings from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    /// Returns the API base URL.
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Returns the access token, if configured.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

impl std::fmt::Debug for MarvinSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarvinSettings")
            .field("api_base", &self.api_base)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Validated application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Document store settings.
    pub cloudant: CloudantConfig,
    /// Task API settings.
    pub marvin: MarvinSettings,
}

impl AppConfig {
    /// Reads and validates configuration through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or a value
    /// is invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            cloudant: cloudant_from_lookup(&lookup)?,
            marvin: MarvinSettings::from_lookup(lookup),
        })
    }

    /// Reads and validates configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or a value
    /// is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }
}

/// Reads document store settings through `lookup`.
///
/// # Errors
///
/// Returns [`ConfigError`] when a required variable is missing or a value is
/// invalid.
pub fn cloudant_from_lookup(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<CloudantConfig, ConfigError> {
    let base_url = require(&lookup, CLOUDANT_URL, "the document store base URL")?;
    let database = require(
        &lookup,
        CLOUDANT_SYNC_DB,
        "the sync database name in your environment or .env file",
    )?;

    let credentials = match (
        read(&lookup, CLOUDANT_USERNAME),
        read(&lookup, CLOUDANT_PASSWORD),
    ) {
        (Some(username), Some(password)) => Some(BasicCredentials::new(username, password)),
        (None, None) => None,
        _ => return Err(ConfigError::IncompleteCredentials),
    };

    let timeout = read(&lookup, CLOUDANT_TIMEOUT_SECONDS)
        .map(|raw| {
            raw.parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|err| ConfigError::InvalidValue {
                    name: CLOUDANT_TIMEOUT_SECONDS,
                    value: raw.clone(),
                    reason: err.to_string(),
                })
        })
        .transpose()?
        .unwrap_or(DEFAULT_TIMEOUT);

    let config = CloudantConfig::new(base_url, database)?.with_timeout(timeout);
    Ok(match credentials {
        Some(pair) => config.with_credentials(pair),
        None => config,
    })
}

fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn read(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn require(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    purpose: &'static str,
) -> Result<String, ConfigError> {
    read(lookup, name).ok_or(ConfigError::MissingVariable { name, purpose })
}
