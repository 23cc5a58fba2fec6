//! Field conversion errors raised while projecting upstream records.

use thiserror::Error;

/// Result type alias for field conversions.
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Errors raised when an upstream text field cannot be decoded.
///
/// These are per-record failures: a projection stops at the first one and
/// the caller decides whether to skip, log, or abort.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// A resource URL did not end in a numeric `/<id>/` segment.
    #[error("Malformed resource URL: '{url}'")]
    MalformedUrl {
        /// The offending URL
        url: String,
    },

    /// A numeric text field was neither a number nor the `unknown` sentinel.
    #[error("Cannot parse '{value}' as a number")]
    NumericParse {
        /// The raw field value
        value: String,
    },
}
