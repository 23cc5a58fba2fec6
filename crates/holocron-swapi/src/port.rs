//! Port trait implementation for `SwapiClient`.
//!
//! This module implements the core-owned `PageSource` trait for
//! `SwapiClient`, mapping internal errors to core port errors.

use async_trait::async_trait;
use holocron_core::{CollectionResource, Page, PageSource, SwapiPortError, SwapiPortResult};

use crate::client::SwapiClient;
use crate::error::SwapiError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `SwapiError` to core `SwapiPortError`.
pub(crate) fn map_error(err: SwapiError) -> SwapiPortError {
    match err {
        SwapiError::ApiRequestFailed { status, url } => {
            SwapiPortError::UpstreamStatus { status, url }
        }
        SwapiError::RetriesExhausted {
            attempts,
            url,
            message,
        } => SwapiPortError::RetriesExhausted {
            attempts,
            message: format!("{url}: {message}"),
        },
        SwapiError::Network(e) => SwapiPortError::Network {
            message: e.to_string(),
        },
        SwapiError::InvalidUrl(e) => SwapiPortError::Configuration {
            message: e.to_string(),
        },
        SwapiError::JsonParse(e) => SwapiPortError::Decode {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B, T> PageSource<T> for SwapiClient<B>
where
    B: HttpBackend,
    T: CollectionResource,
{
    async fn fetch_page(&self, page: u32) -> SwapiPortResult<Page<T>> {
        self.get_page::<T>(page).await.map_err(map_error)
    }
}
