//! Configuration loader for environment variables and overrides.
//!
//! Responsibilities:
//! - Load connection settings from `.env` files and environment variables.
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration
//!   merging (defaults < environment < explicit overrides).
//! - Enforce the `DOTENV_DISABLED` gate to prevent accidental dotenv loading
//!   in tests.
//!
//! Does NOT handle:
//! - Persisting configuration to disk.
//! - Construction of the HTTP client (see the client crate's builder).
//!
//! Invariants / Assumptions:
//! - Explicit `with_*` overrides take precedence over environment values.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - A username without a password (or vice versa) is a configuration error.

use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::types::{Config, ConnectionConfig, Credentials};

/// Environment variable holding the cluster base URL.
pub const ENV_BASE_URL: &str = "ELASTICSEARCH_URL";
/// Environment variable holding the basic-auth username.
pub const ENV_USERNAME: &str = "ELASTICSEARCH_USERNAME";
/// Environment variable holding the basic-auth password.
pub const ENV_PASSWORD: &str = "ELASTICSEARCH_PASSWORD";
/// Environment variable holding the request timeout in seconds.
pub const ENV_TIMEOUT: &str = "ELASTICSEARCH_TIMEOUT";
/// Environment variable toggling TLS certificate verification.
pub const ENV_SKIP_VERIFY: &str = "ELASTICSEARCH_SKIP_VERIFY";

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Invalid base URL '{url}': {message}")]
    InvalidBaseUrl { url: String, message: String },

    #[error("Username was provided without a password")]
    MissingPassword,

    #[error("Password was provided without a username")]
    MissingUsername,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration loader that builds config from environment variables and
/// explicit overrides.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    base_url: Option<String>,
    username: Option<String>,
    password: Option<SecretString>,
    skip_verify: Option<bool>,
    timeout: Option<Duration>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a `.env` file from the current directory, if present.
    ///
    /// Gated by the `DOTENV_DISABLED` environment variable so tests can opt
    /// out of picking up a developer's local `.env`. A missing `.env` file is
    /// not an error.
    pub fn load_dotenv(&self) -> Result<(), ConfigError> {
        if std::env::var("DOTENV_DISABLED").is_ok() {
            tracing::debug!("dotenv loading disabled via DOTENV_DISABLED");
            return Ok(());
        }
        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "loaded .env file");
                Ok(())
            }
            Err(e) if e.not_found() => Ok(()),
            Err(e) => Err(ConfigError::InvalidValue {
                var: ".env".to_string(),
                message: e.to_string(),
            }),
        }
    }

    /// Read configuration from environment variables.
    ///
    /// Values already set via `with_*` overrides are preserved.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        if self.base_url.is_none() {
            self.base_url = env_var_or_none(ENV_BASE_URL);
        }
        if self.username.is_none() {
            self.username = env_var_or_none(ENV_USERNAME);
        }
        if self.password.is_none() {
            self.password = env_var_or_none(ENV_PASSWORD).map(|p| SecretString::new(p.into()));
        }
        if self.timeout.is_none()
            && let Some(raw) = env_var_or_none(ENV_TIMEOUT)
        {
            let secs: u64 = raw.parse().map_err(|_| ConfigError::InvalidValue {
                var: ENV_TIMEOUT.to_string(),
                message: format!("expected a number of seconds, got '{raw}'"),
            })?;
            self.timeout = Some(Duration::from_secs(secs));
        }
        if self.skip_verify.is_none()
            && let Some(raw) = env_var_or_none(ENV_SKIP_VERIFY)
        {
            self.skip_verify = Some(parse_bool(ENV_SKIP_VERIFY, &raw)?);
        }
        Ok(self)
    }

    /// Override the cluster base URL.
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Override the basic-auth username.
    pub fn with_username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }

    /// Override the basic-auth password.
    pub fn with_password(mut self, password: SecretString) -> Self {
        self.password = Some(password);
        self
    }

    /// Override the TLS verification setting.
    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the final [`Config`], validating the merged values.
    pub fn build(self) -> Result<Config, ConfigError> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        validate_base_url(&base_url)?;

        let credentials = match (self.username, self.password) {
            (Some(username), Some(password)) => Some(Credentials { username, password }),
            (None, None) => None,
            (Some(_), None) => return Err(ConfigError::MissingPassword),
            (None, Some(_)) => return Err(ConfigError::MissingUsername),
        };

        Ok(Config {
            connection: ConnectionConfig {
                base_url,
                skip_verify: self.skip_verify.unwrap_or(false),
                timeout: self
                    .timeout
                    .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            },
            credentials,
        })
    }
}

/// Read an environment variable, treating blank values as unset.
pub fn env_var_or_none(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_bool(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var: var.to_string(),
            message: format!("expected a boolean, got '{raw}'"),
        }),
    }
}

fn validate_base_url(base_url: &str) -> Result<(), ConfigError> {
    let parsed = url::Url::parse(base_url).map_err(|e| ConfigError::InvalidBaseUrl {
        url: base_url.to_string(),
        message: e.to_string(),
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            message: format!("unsupported scheme '{other}'"),
        }),
    }
}
