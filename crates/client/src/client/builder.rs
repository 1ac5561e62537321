//! Client builder for constructing [`EsClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (base_url)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeout, TLS verification)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`EsClient`] methods)
//! - Credential loading (handled by the config crate)
//!
//! # Invariants
//! - `base_url` is required and must be provided before calling `build()`
//! - The base URL is always normalized to have no trailing slashes
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning

use std::time::Duration;

use dataview_config::Config;
use dataview_config::constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS};

use crate::auth::BasicCredentials;
use crate::client::EsClient;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`EsClient`].
///
/// All configuration options have sensible defaults except for `base_url`,
/// which is required.
pub struct EsClientBuilder {
    base_url: Option<String>,
    credentials: Option<BasicCredentials>,
    skip_verify: bool,
    timeout: Duration,
}

impl Default for EsClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            credentials: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl EsClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the cluster.
    ///
    /// This should include the protocol and port, e.g., `http://localhost:9200`.
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the basic-auth credentials.
    pub fn credentials(mut self, credentials: BasicCredentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this in development or testing environments. Disabling TLS
    /// verification makes the connection vulnerable to man-in-the-middle
    /// attacks.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the request timeout.
    ///
    /// Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create a client builder from configuration.
    ///
    /// Centralizes the conversion from config crate types to client crate
    /// types so `main` does not repeat it.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.credentials = config.credentials.as_ref().map(BasicCredentials::from);
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// This prevents double slashes when concatenating with endpoint paths.
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`EsClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` was not provided.
    /// Returns [`ClientError::HttpError`] if the HTTP client fails to build.
    pub fn build(self) -> Result<EsClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            if base_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                // skip_verify only affects TLS certificate verification.
                // It has no effect on HTTP connections since there is no TLS layer.
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(EsClient {
            http,
            base_url,
            credentials: self.credentials,
        })
    }
}
