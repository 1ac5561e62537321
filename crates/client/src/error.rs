//! Error types for the Elasticsearch client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Elasticsearch client operations.
///
/// The first four variants form the closed taxonomy reported verbatim to
/// operators; the remaining variants are surfaced as unexpected failures.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The liveness probe could not reach a healthy cluster.
    #[error("Connection error: Failed to connect to Elasticsearch cluster.")]
    ConnectionFailed,

    /// The cluster rejected the supplied credentials.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// The search targeted an index that does not exist.
    #[error("Index '{0}' not found.")]
    IndexNotFound(String),

    /// Any other search-time failure (transport or query).
    #[error("An error occurred while searching: {0}")]
    SearchFailed(String),

    /// Invalid response format from Elasticsearch.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP client construction or transport error outside a request.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
}

impl ClientError {
    /// Check if this error indicates authentication failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::AuthFailed(_))
    }

    /// Check if this error carries an operator-facing diagnostic line.
    ///
    /// Errors outside the closed taxonomy (parse failures, client
    /// construction problems) are reported as unexpected failures instead.
    pub fn has_operator_message(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed
                | Self::AuthFailed(_)
                | Self::IndexNotFound(_)
                | Self::SearchFailed(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_failed_message_is_fixed() {
        assert_eq!(
            ClientError::ConnectionFailed.to_string(),
            "Connection error: Failed to connect to Elasticsearch cluster."
        );
    }

    #[test]
    fn test_index_not_found_names_the_index() {
        let err = ClientError::IndexNotFound(".kibana".to_string());
        assert_eq!(err.to_string(), "Index '.kibana' not found.");
    }

    #[test]
    fn test_auth_failed_carries_underlying_message() {
        let err = ClientError::AuthFailed("invalid credentials".to_string());
        assert_eq!(err.to_string(), "Authentication failed: invalid credentials");
        assert!(err.is_auth_error());
    }

    #[test]
    fn test_has_operator_message() {
        assert!(ClientError::ConnectionFailed.has_operator_message());
        assert!(ClientError::SearchFailed("boom".to_string()).has_operator_message());
        assert!(!ClientError::InvalidResponse("bad json".to_string()).has_operator_message());
        assert!(!ClientError::InvalidUrl("".to_string()).has_operator_message());
    }
}
