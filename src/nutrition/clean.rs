//! Raw value cleaning
//!
//! The source export leaves nutrients blank, writes `NULL`, or has junk in
//! numeric columns. All of those become zero; nothing here fails.

use super::units::mg_to_g;

/// Placeholder the source export uses for a missing value
pub const NULL_MARKER: &str = "NULL";

/// Decimal places kept on every nutrient value
pub const DECIMAL_PLACES: u32 = 2;

/// Clean a raw nutrient value
///
/// Missing, empty, `NULL`, unparseable and non-finite values are 0. Parsed
/// values are optionally converted from milligrams to grams, then rounded to
/// [`DECIMAL_PLACES`] with [`round_to`].
///
/// Examples:
/// - `clean_value(Some("12.345"), false)` -> 12.35
/// - `clean_value(Some("5000"), true)` -> 5.0
/// - `clean_value(Some("NULL"), false)` -> 0.0
pub fn clean_value(raw: Option<&str>, convert_mg_to_g: bool) -> f64 {
    let raw = match raw {
        Some(s) => s.trim(),
        None => return 0.0,
    };

    if raw.is_empty() || raw == NULL_MARKER {
        return 0.0;
    }

    match raw.parse::<f64>() {
        Ok(num) if num.is_finite() => {
            let num = if convert_mg_to_g { mg_to_g(num) } else { num };
            round_to(num, DECIMAL_PLACES)
        }
        _ => 0.0,
    }
}

/// Round to `places` decimal places, nearest with ties to even
///
/// Rounds the exact binary value of `value` the way `{:.N}` formatting does,
/// so `2.675` (stored as 2.67499...) becomes 2.67. Negative zero is
/// normalized to zero.
pub fn round_to(value: f64, places: u32) -> f64 {
    let rounded = format!("{:.*}", places as usize, value)
        .parse::<f64>()
        .unwrap_or(value);
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
