//! Internal error types for SWAPI operations.
//!
//! These errors are internal to `holocron-swapi` and are mapped to core port
//! errors at the boundary.

use thiserror::Error;

/// Result type alias for SWAPI operations.
pub type SwapiResult<T> = Result<T, SwapiError>;

/// Errors related to SWAPI operations.
#[derive(Debug, Error)]
pub enum SwapiError {
    /// API request failed with an HTTP error status.
    #[error("SWAPI request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// Network errors persisted through every retry.
    #[error("SWAPI unreachable after {attempts} attempts ({url}): {message}")]
    RetriesExhausted {
        /// Total attempts made, including the first
        attempts: u32,
        /// The URL that was requested
        url: String,
        /// Description of the last network error
        message: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_request_failed_error_message() {
        let error = SwapiError::ApiRequestFailed {
            status: 404,
            url: "http://swapi.dev/api/people/?page=12".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("page=12"));
    }

    #[test]
    fn test_retries_exhausted_error_message() {
        let error = SwapiError::RetriesExhausted {
            attempts: 4,
            url: "http://swapi.dev/api/people/?page=1".to_string(),
            message: "connection refused".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("4 attempts"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn test_json_parse_from() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error: SwapiError = json_err.into();
        assert!(matches!(error, SwapiError::JsonParse(_)));
    }
}
