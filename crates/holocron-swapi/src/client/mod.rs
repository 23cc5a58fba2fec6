//! SWAPI client for fetching collection pages.

mod pages;

use holocron_core::SwapiPortResult;

use crate::config::SwapiClientConfig;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::SwapiConfig;
use crate::port::map_error;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default SWAPI client using the reqwest HTTP backend.
pub type DefaultSwapiClient = SwapiClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the SWAPI REST API.
///
/// This client is generic over an HTTP backend, allowing for easy testing.
/// Use `DefaultSwapiClient` for production code and interact with it through
/// the `PageSource` port.
pub struct SwapiClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: SwapiConfig,
}

impl DefaultSwapiClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails if the configured base URL cannot be parsed or the HTTP client
    /// cannot be built.
    pub fn new(config: &SwapiClientConfig) -> SwapiPortResult<Self> {
        let internal_config = SwapiConfig::from_public(config).map_err(map_error)?;
        let backend = ReqwestBackend::new(&internal_config).map_err(map_error)?;
        Ok(Self {
            backend,
            config: internal_config,
        })
    }
}

impl<B: HttpBackend> SwapiClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: SwapiConfig, backend: B) -> Self {
        Self { backend, config }
    }
}
