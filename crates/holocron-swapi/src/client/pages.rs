//! Single-page fetches.

use holocron_core::{CollectionResource, Page};

use crate::error::SwapiResult;
use crate::http::HttpBackend;
use crate::url::build_page_url;

use super::SwapiClient;

impl<B: HttpBackend> SwapiClient<B> {
    /// Fetch one page (one-based) of the collection `T` lives in.
    pub(crate) async fn get_page<T: CollectionResource>(&self, page: u32) -> SwapiResult<Page<T>> {
        let url = build_page_url(&self.config, T::COLLECTION, page);
        tracing::debug!(collection = T::COLLECTION, page, %url, "Fetching page");
        self.backend.get_json(&url).await
    }
}
