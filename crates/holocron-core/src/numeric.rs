//! Decoding of SWAPI's text-encoded numeric fields.
//!
//! The upstream API sends every number as a string, using `"unknown"` where
//! a value is missing and `,` as a thousands separator (`"1,358"`).

use crate::error::{ConversionError, ConversionResult};

/// Literal the upstream API sends in place of a missing value.
pub const UNKNOWN_SENTINEL: &str = "unknown";

/// Decode a numeric text field into an optional number.
///
/// Returns `Ok(None)` for the `unknown` sentinel. Thousands separators are
/// stripped before parsing. Values are parsed as `f64` because populations
/// and diameters routinely exceed 32-bit ranges.
pub fn parse_optional_number(text: &str) -> ConversionResult<Option<f64>> {
    if text == UNKNOWN_SENTINEL {
        return Ok(None);
    }

    let cleaned: String = text.chars().filter(|&c| c != ',').collect();

    match cleaned.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(ConversionError::NumericParse {
            value: text.to_string(),
        }),
    }
}
