//! Liveness probe method for [`EsClient`].

use crate::client::EsClient;
use crate::endpoints;
use crate::error::Result;

impl EsClient {
    /// Verify the cluster is reachable before issuing real requests.
    ///
    /// Sends a `HEAD /` to the cluster root. A successful status means the
    /// connection is usable; anything else maps into the error taxonomy
    /// (see [`endpoints::ping`]).
    pub async fn ping(&self) -> Result<()> {
        endpoints::ping(&self.http, &self.base_url, self.credentials.as_ref()).await
    }
}
