//! Data view search method for [`EsClient`].

use dataview_config::constants::DATA_VIEW_TYPE;

use crate::client::EsClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::SearchHit;

impl EsClient {
    /// Fetch the data view saved objects stored in `index`.
    ///
    /// Issues exactly one term-filter search; there is no pagination loop.
    /// `page_size` sets an explicit result page size; `None` leaves the
    /// server's default page size in effect, which may truncate large
    /// result sets.
    pub async fn find_data_views(
        &self,
        index: &str,
        page_size: Option<u64>,
    ) -> Result<Vec<SearchHit>> {
        endpoints::find_by_type(
            &self.http,
            &self.base_url,
            self.credentials.as_ref(),
            index,
            DATA_VIEW_TYPE,
            page_size,
        )
        .await
    }
}
