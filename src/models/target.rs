//! SparkyFitness food record
//!
//! One row of the import CSV. Field order here is the column order on disk.

use serde::Serialize;

use crate::nutrition::clean_value;

use super::{SourceRow, COLUMN_MAPPING, NAME_COLUMN};

/// SparkyFitness import header, in column order
pub const TARGET_HEADERS: [&str; 25] = [
    "name",
    "brand",
    "is_custom",
    "shared_with_public",
    "is_quick_food",
    "serving_size",
    "serving_unit",
    "calories",
    "protein",
    "carbs",
    "fat",
    "saturated_fat",
    "polyunsaturated_fat",
    "monounsaturated_fat",
    "trans_fat",
    "cholesterol",
    "sodium",
    "potassium",
    "dietary_fiber",
    "sugars",
    "vitamin_a",
    "vitamin_c",
    "calcium",
    "iron",
    "is_default",
];

/// Brand stamped on every converted food
pub const DEFAULT_BRAND: &str = "USDA";

/// MyFoodData values are per 100 g
pub const SERVING_SIZE: u32 = 100;
pub const SERVING_UNIT: &str = "g";

/// Numeric nutrient columns of the import
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NutrientField {
    Calories,
    Protein,
    Carbs,
    Fat,
    SaturatedFat,
    PolyunsaturatedFat,
    MonounsaturatedFat,
    TransFat,
    Cholesterol,
    Sodium,
    Potassium,
    DietaryFiber,
    Sugars,
    VitaminA,
    VitaminC,
    Calcium,
    Iron,
}

#[cfg(test)]
impl NutrientField {
    pub const ALL: [NutrientField; 17] = [
        NutrientField::Calories,
        NutrientField::Protein,
        NutrientField::Carbs,
        NutrientField::Fat,
        NutrientField::SaturatedFat,
        NutrientField::PolyunsaturatedFat,
        NutrientField::MonounsaturatedFat,
        NutrientField::TransFat,
        NutrientField::Cholesterol,
        NutrientField::Sodium,
        NutrientField::Potassium,
        NutrientField::DietaryFiber,
        NutrientField::Sugars,
        NutrientField::VitaminA,
        NutrientField::VitaminC,
        NutrientField::Calcium,
        NutrientField::Iron,
    ];
}

impl NutrientField {
    /// Target column name, as in [`TARGET_HEADERS`]
    pub fn as_str(&self) -> &'static str {
        match self {
            NutrientField::Calories => "calories",
            NutrientField::Protein => "protein",
            NutrientField::Carbs => "carbs",
            NutrientField::Fat => "fat",
            NutrientField::SaturatedFat => "saturated_fat",
            NutrientField::PolyunsaturatedFat => "polyunsaturated_fat",
            NutrientField::MonounsaturatedFat => "monounsaturated_fat",
            NutrientField::TransFat => "trans_fat",
            NutrientField::Cholesterol => "cholesterol",
            NutrientField::Sodium => "sodium",
            NutrientField::Potassium => "potassium",
            NutrientField::DietaryFiber => "dietary_fiber",
            NutrientField::Sugars => "sugars",
            NutrientField::VitaminA => "vitamin_a",
            NutrientField::VitaminC => "vitamin_c",
            NutrientField::Calcium => "calcium",
            NutrientField::Iron => "iron",
        }
    }
}

/// A food row for the SparkyFitness import
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetFood {
    pub name: String,
    pub brand: String,
    pub is_custom: bool,
    pub shared_with_public: bool,
    pub is_quick_food: bool,
    pub serving_size: u32,
    pub serving_unit: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub saturated_fat: f64,
    pub polyunsaturated_fat: f64,
    pub monounsaturated_fat: f64,
    pub trans_fat: f64,
    pub cholesterol: f64,
    pub sodium: f64,
    pub potassium: f64,
    pub dietary_fiber: f64,
    pub sugars: f64,
    pub vitamin_a: f64,
    pub vitamin_c: f64,
    pub calcium: f64,
    pub iron: f64,
    pub is_default: bool,
}

impl TargetFood {
    /// A food with the fixed import flags and all nutrients at zero
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            brand: DEFAULT_BRAND.to_string(),
            is_custom: true,
            shared_with_public: false,
            is_quick_food: false,
            serving_size: SERVING_SIZE,
            serving_unit: SERVING_UNIT.to_string(),
            calories: 0.0,
            protein: 0.0,
            carbs: 0.0,
            fat: 0.0,
            saturated_fat: 0.0,
            polyunsaturated_fat: 0.0,
            monounsaturated_fat: 0.0,
            trans_fat: 0.0,
            cholesterol: 0.0,
            sodium: 0.0,
            potassium: 0.0,
            dietary_fiber: 0.0,
            sugars: 0.0,
            vitamin_a: 0.0,
            vitamin_c: 0.0,
            calcium: 0.0,
            iron: 0.0,
            is_default: false,
        }
    }

    /// Build a food from a source row
    ///
    /// Returns None when the trimmed name is empty; such rows are not imported.
    pub fn from_source(row: &SourceRow<'_>) -> Option<Self> {
        let name = row.get(NAME_COLUMN).map(str::trim).unwrap_or("");
        if name.is_empty() {
            return None;
        }

        let mut food = Self::new(name);
        for mapping in COLUMN_MAPPING {
            *food.nutrient_mut(mapping.field) = clean_value(
                row.get(mapping.source),
                mapping.conversion.converts_mg_to_g(),
            );
        }
        Some(food)
    }

    /// Mutable access to the column backing `field`
    pub fn nutrient_mut(&mut self, field: NutrientField) -> &mut f64 {
        match field {
            NutrientField::Calories => &mut self.calories,
            NutrientField::Protein => &mut self.protein,
            NutrientField::Carbs => &mut self.carbs,
            NutrientField::Fat => &mut self.fat,
            NutrientField::SaturatedFat => &mut self.saturated_fat,
            NutrientField::PolyunsaturatedFat => &mut self.polyunsaturated_fat,
            NutrientField::MonounsaturatedFat => &mut self.monounsaturated_fat,
            NutrientField::TransFat => &mut self.trans_fat,
            NutrientField::Cholesterol => &mut self.cholesterol,
            NutrientField::Sodium => &mut self.sodium,
            NutrientField::Potassium => &mut self.potassium,
            NutrientField::DietaryFiber => &mut self.dietary_fiber,
            NutrientField::Sugars => &mut self.sugars,
            NutrientField::VitaminA => &mut self.vitamin_a,
            NutrientField::VitaminC => &mut self.vitamin_c,
            NutrientField::Calcium => &mut self.calcium,
            NutrientField::Iron => &mut self.iron,
        }
    }
}
