//! SWAPI page source port.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Page;

/// Errors from fetching a page of a collection resource.
///
/// These are domain-level errors. Implementation-specific errors (HTTP, JSON)
/// are mapped to these at the adapter boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwapiPortError {
    /// Connection-level failure talking to the upstream API.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// Network failures persisted past the retry bound.
    #[error("Upstream unreachable after {attempts} attempts: {message}")]
    RetriesExhausted {
        /// Total attempts made, including the first
        attempts: u32,
        /// Description of the last failure
        message: String,
    },

    /// Upstream answered with a non-success status.
    #[error("Upstream responded with status {status}: {url}")]
    UpstreamStatus {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The response body was not a valid page envelope.
    #[error("Cannot decode upstream response: {message}")]
    Decode {
        /// What was invalid
        message: String,
    },

    /// Client misconfiguration (e.g. an unusable base URL).
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

/// Result type alias for page source operations.
pub type SwapiPortResult<T> = Result<T, SwapiPortError>;

/// A source of pages for one collection resource.
///
/// The implementation lives in `holocron-swapi`. Pages are one-based.
#[async_trait]
pub trait PageSource<T>: Send + Sync {
    /// Fetch a single page of the collection.
    async fn fetch_page(&self, page: u32) -> SwapiPortResult<Page<T>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SwapiPortError::RetriesExhausted {
            attempts: 4,
            message: "connection refused".to_string(),
        };
        assert!(err.to_string().contains("4 attempts"));
        assert!(err.to_string().contains("connection refused"));

        let err = SwapiPortError::UpstreamStatus {
            status: 404,
            url: "https://swapi.dev/api/people/?page=99".to_string(),
        };
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("page=99"));
    }
}
