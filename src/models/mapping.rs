//! MyFoodData column -> SparkyFitness field mapping

use crate::nutrition::UnitConversion;

use super::NutrientField;

/// Source column holding the food name
pub const NAME_COLUMN: &str = "Name";

/// One source column feeding one nutrient field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMapping {
    pub source: &'static str,
    pub field: NutrientField,
    pub conversion: UnitConversion,
}

const fn direct(source: &'static str, field: NutrientField) -> ColumnMapping {
    ColumnMapping {
        source,
        field,
        conversion: UnitConversion::None,
    }
}

const fn from_mg(source: &'static str, field: NutrientField) -> ColumnMapping {
    ColumnMapping {
        source,
        field,
        conversion: UnitConversion::MgToG,
    }
}

/// Every nutrient field and the source column it is read from
pub const COLUMN_MAPPING: &[ColumnMapping] = &[
    direct("Calories", NutrientField::Calories),
    direct("Protein (g)", NutrientField::Protein),
    direct("Carbohydrate (g)", NutrientField::Carbs),
    direct("Fat (g)", NutrientField::Fat),
    direct("Saturated Fats (g)", NutrientField::SaturatedFat),
    from_mg(
        "Fatty acids, total polyunsaturated (mg)",
        NutrientField::PolyunsaturatedFat,
    ),
    from_mg(
        "Fatty acids, total monounsaturated (mg)",
        NutrientField::MonounsaturatedFat,
    ),
    direct("Trans Fatty Acids (g)", NutrientField::TransFat),
    direct("Cholesterol (mg)", NutrientField::Cholesterol),
    direct("Sodium (mg)", NutrientField::Sodium),
    direct("Potassium, K (mg)", NutrientField::Potassium),
    direct("Fiber (g)", NutrientField::DietaryFiber),
    direct("Sugars (g)", NutrientField::Sugars),
    // RAE, not IU
    direct("Vitamin A, RAE (mcg)", NutrientField::VitaminA),
    direct("Vitamin C (mg)", NutrientField::VitaminC),
    direct("Calcium (mg)", NutrientField::Calcium),
    direct("Iron, Fe (mg)", NutrientField::Iron),
];
