//! Low-level HTTP endpoint functions.
//!
//! Each function performs one request against the cluster and maps the
//! response (or transport failure) into the closed [`ClientError`]
//! taxonomy. Higher-level [`EsClient`](crate::client::EsClient) methods
//! delegate here.

mod ping;
mod search;

pub use ping::ping;
pub use search::find_by_type;

use crate::error::ClientError;

/// Extract a human-readable reason from an Elasticsearch error response.
///
/// Elasticsearch wraps failures as `{"error": {"reason": "..."}}`; when that
/// shape is present the reason is returned, otherwise the raw body (or the
/// HTTP status reason for empty bodies).
pub(crate) async fn read_error_reason(response: reqwest::Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(&body)
        && let Some(reason) = value
            .get("error")
            .and_then(|e| e.get("reason"))
            .and_then(|r| r.as_str())
    {
        return reason.to_string();
    }
    if body.trim().is_empty() {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    } else {
        body
    }
}

/// Map an authentication-relevant status to [`ClientError::AuthFailed`].
pub(crate) async fn auth_error(response: reqwest::Response) -> ClientError {
    ClientError::AuthFailed(read_error_reason(response).await)
}
