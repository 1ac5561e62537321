//! Basic-auth credential handling for the Elasticsearch client.
//!
//! Responsibilities:
//! - Hold the credential pair used for HTTP basic authentication.
//! - Apply the credentials to outgoing requests.
//!
//! Does NOT handle:
//! - Session tokens or API keys (the audit tool only supports basic auth).
//! - Credential loading (see the config crate's loader).

use secrecy::{ExposeSecret, SecretString};

/// Username/password pair applied to every request.
///
/// The password stays wrapped in [`SecretString`] until the moment it is
/// handed to the transport, so debug output never exposes it.
#[derive(Debug, Clone)]
pub struct BasicCredentials {
    username: String,
    password: SecretString,
}

impl BasicCredentials {
    /// Create a new credential pair.
    pub fn new(username: String, password: SecretString) -> Self {
        Self { username, password }
    }

    /// The username half of the pair.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Attach these credentials to a request as HTTP basic auth.
    pub(crate) fn apply(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder.basic_auth(&self.username, Some(self.password.expose_secret()))
    }
}

impl From<&dataview_config::Credentials> for BasicCredentials {
    fn from(credentials: &dataview_config::Credentials) -> Self {
        Self {
            username: credentials.username.clone(),
            password: credentials.password.clone(),
        }
    }
}
