//! Configuration types for the data view audit CLI.

use std::time::Duration;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Basic-auth credential pair for the cluster.
///
/// The password is wrapped in [`SecretString`] so it is redacted in debug
/// output and never logged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// Username for basic authentication.
    pub username: String,
    /// Password for basic authentication.
    #[serde(with = "secret_string")]
    pub password: SecretString,
}

/// Connection configuration for the Elasticsearch cluster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the cluster (e.g., http://localhost:9200)
    pub base_url: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
    /// Connection timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Optional basic-auth credentials; `None` means anonymous access.
    pub credentials: Option<Credentials>,
}

impl Config {
    /// Create an anonymous configuration for the given base URL.
    pub fn anonymous(base_url: String) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url,
                ..ConnectionConfig::default()
            },
            credentials: None,
        }
    }

    /// Create a configuration with basic-auth credentials.
    pub fn with_basic_auth(base_url: String, username: String, password: SecretString) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url,
                ..ConnectionConfig::default()
            },
            credentials: Some(Credentials { username, password }),
        }
    }
}
