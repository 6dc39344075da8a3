//! Unit types and conversion constants

/// Milligrams per gram
pub const MG_PER_G: f64 = 1000.0;

/// Convert a milligram amount to grams
pub fn mg_to_g(mg: f64) -> f64 {
    mg / MG_PER_G
}

/// Conversion applied to a source column before it lands in the target field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitConversion {
    /// Source unit already matches the target field
    #[default]
    None,
    /// Source is milligrams, target is grams
    MgToG,
}

impl UnitConversion {
    /// Whether values from this column are divided by [`MG_PER_G`]
    pub fn converts_mg_to_g(&self) -> bool {
        matches!(self, UnitConversion::MgToG)
    }
}
