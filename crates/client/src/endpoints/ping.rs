//! Cluster liveness probe endpoint.

use reqwest::Client;
use tracing::debug;

use crate::auth::BasicCredentials;
use crate::endpoints::auth_error;
use crate::error::{ClientError, Result};

/// Probe the cluster root to verify the connection is usable.
///
/// Any transport error or non-auth failure status collapses into
/// [`ClientError::ConnectionFailed`]; a 401/403 is reported as
/// [`ClientError::AuthFailed`] with the server's reason.
pub async fn ping(
    client: &Client,
    base_url: &str,
    credentials: Option<&BasicCredentials>,
) -> Result<()> {
    let url = format!("{}/", base_url);

    let mut builder = client.head(&url);
    if let Some(credentials) = credentials {
        builder = credentials.apply(builder);
    }

    let response = match builder.send().await {
        Ok(response) => response,
        Err(e) => {
            debug!(error = %e, "liveness probe transport error");
            return Err(ClientError::ConnectionFailed);
        }
    };

    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    if status.as_u16() == 401 || status.as_u16() == 403 {
        return Err(auth_error(response).await);
    }

    debug!(status = status.as_u16(), "liveness probe returned non-success");
    Err(ClientError::ConnectionFailed)
}
