//! Saved-object search endpoint.

use reqwest::Client;
use serde_json::json;
use tracing::debug;

use dataview_config::constants::SAVED_OBJECT_TYPE_FIELD;

use crate::auth::BasicCredentials;
use crate::endpoints::{auth_error, read_error_reason};
use crate::error::{ClientError, Result};
use crate::models::{SearchHit, SearchResponse};

/// Run one term-filter search for saved objects of the given type.
///
/// Issues `POST /{index}/_search` with a `term` query on the saved-object
/// type keyword field. When `page_size` is `None` no `size` parameter is
/// sent and the server's default page size applies; callers that care about
/// truncation must pass an explicit size.
///
/// # Errors
/// - 404 → [`ClientError::IndexNotFound`] (the index does not exist)
/// - 401/403 → [`ClientError::AuthFailed`]
/// - other failures → [`ClientError::SearchFailed`] with the server reason
pub async fn find_by_type(
    client: &Client,
    base_url: &str,
    credentials: Option<&BasicCredentials>,
    index: &str,
    object_type: &str,
    page_size: Option<u64>,
) -> Result<Vec<SearchHit>> {
    let url = format!("{}/{}/_search", base_url, index);

    let mut body = json!({
        "query": {
            "term": {
                SAVED_OBJECT_TYPE_FIELD: { "value": object_type }
            }
        }
    });
    if let Some(size) = page_size {
        body["size"] = json!(size);
    }

    debug!(%url, object_type, ?page_size, "searching for saved objects");

    let mut builder = client.post(&url).json(&body);
    if let Some(credentials) = credentials {
        builder = credentials.apply(builder);
    }

    let response = match builder.send().await {
        Ok(response) => response,
        Err(e) => return Err(ClientError::SearchFailed(e.to_string())),
    };

    let status = response.status();
    if status.as_u16() == 404 {
        return Err(ClientError::IndexNotFound(index.to_string()));
    }
    if status.as_u16() == 401 || status.as_u16() == 403 {
        return Err(auth_error(response).await);
    }
    if !status.is_success() {
        return Err(ClientError::SearchFailed(read_error_reason(response).await));
    }

    let parsed: SearchResponse = response
        .json()
        .await
        .map_err(|e| ClientError::InvalidResponse(format!("failed to parse search response: {e}")))?;

    Ok(parsed.hits.hits)
}
