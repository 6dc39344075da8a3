//! Data models
//!
//! Source rows from the MyFoodData export and target rows for the
//! SparkyFitness food import.

mod mapping;
mod source;
mod target;

pub use mapping::{ColumnMapping, COLUMN_MAPPING, NAME_COLUMN};
pub use source::{SourceColumns, SourceRow};
pub use target::{NutrientField, TargetFood, TARGET_HEADERS};
