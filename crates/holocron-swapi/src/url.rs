//! URL construction helpers for the SWAPI client.

use crate::models::SwapiConfig;
use url::Url;

/// Build the URL of a collection resource (e.g. `.../api/people/`).
pub fn build_collection_url(config: &SwapiConfig, collection: &str) -> Url {
    let mut url = config.base_url.clone();

    let base_path = url.path().trim_end_matches('/').to_string();
    url.set_path(&format!("{base_path}/{collection}/"));
    url.set_query(None);

    url
}

/// Build the URL of a one-based page of a collection resource.
pub fn build_page_url(config: &SwapiConfig, collection: &str, page: u32) -> Url {
    let mut url = build_collection_url(config, collection);
    url.set_query(Some(&format!("page={page}")));
    url
}
