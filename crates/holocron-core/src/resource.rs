//! Resource identifier extraction.
//!
//! SWAPI records reference themselves and each other by URL, e.g.
//! `https://swapi.dev/api/planets/2/`. The numeric ID is the second-to-last
//! `/`-separated segment (the URL carries a trailing slash).

use crate::error::{ConversionError, ConversionResult};

/// Extract the numeric resource ID from a SWAPI resource URL.
///
/// Returns `2` for `https://swapi.dev/api/planets/2/`.
pub fn resource_id_from_url(url: &str) -> ConversionResult<u32> {
    let malformed = || ConversionError::MalformedUrl {
        url: url.to_string(),
    };

    let segment = url.rsplit('/').nth(1).ok_or_else(malformed)?;

    // `u32::from_str` accepts a leading '+'; IDs never carry one
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }

    segment.parse().map_err(|_| malformed())
}
