//! Main Elasticsearch client and API methods.
//!
//! This module provides the [`EsClient`] handle used by the audit pipeline.
//! The handle is created once, used for one liveness probe and one search,
//! and dropped at process exit.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `ping`: Liveness probe method
//! - `data_views`: Data view search method
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Retry or backoff of any kind (each call is issued exactly once)

pub mod builder;
mod data_views;
mod ping;

use crate::auth::BasicCredentials;

/// Elasticsearch REST client.
///
/// # Creating a Client
///
/// Use [`EsClient::builder()`] to create a new client:
///
/// ```rust,ignore
/// use dataview_client::EsClient;
///
/// let client = EsClient::builder()
///     .base_url("http://localhost:9200".to_string())
///     .build()?;
/// ```
///
/// Credentials are optional; when present they are sent as HTTP basic auth
/// on every request.
#[derive(Debug)]
pub struct EsClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) credentials: Option<BasicCredentials>,
}

impl EsClient {
    /// Create a new client builder.
    ///
    /// This is the entry point for constructing an [`EsClient`].
    pub fn builder() -> builder::EsClientBuilder {
        builder::EsClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether the client sends basic-auth credentials.
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }
}
