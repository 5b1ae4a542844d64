//! Input validation functions
//!
//! Raw form input is checked here before it reaches the formula. The only
//! numeric check is parseability; weight is deliberately not range checked.

use crate::errors::{EstimateError, InputField};

/// Parse a weight in kilograms from raw text
///
/// Accepts an optional sign, a decimal point and an exponent. Leading and
/// trailing characters up to and including the space (`\x00`-`\x20`) are
/// ignored. Decimal commas, thousands separators, hexadecimal and the
/// non-finite spellings (`NaN`, `inf`) are rejected.
pub fn parse_weight_kg(input: &str) -> Result<f64, EstimateError> {
    let trimmed = input.trim_matches(|c: char| c <= ' ');
    if trimmed.is_empty() {
        return Err(EstimateError::invalid(InputField::Weight));
    }
    // f64::from_str also takes "inf", "infinity" and "nan" in any case
    if trimmed.bytes().any(|b| b.is_ascii_alphabetic() && b != b'e' && b != b'E') {
        return Err(EstimateError::invalid(InputField::Weight));
    }
    match trimmed.parse::<f64>() {
        Ok(kg) if kg.is_finite() => Ok(kg),
        _ => Err(EstimateError::invalid(InputField::Weight)),
    }
}
