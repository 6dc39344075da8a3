//! Nutrition value handling
//!
//! Unit conversion and cleaning of raw nutrient values from the source export.

pub mod clean;
pub mod units;

pub use clean::{clean_value, round_to, DECIMAL_PLACES, NULL_MARKER};
pub use units::{mg_to_g, UnitConversion, MG_PER_G};
