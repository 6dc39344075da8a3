//! SparkyFitness food import tools
//!
//! Converts the MyFoodData nutrition export into the SparkyFitness food
//! import format and splits the result into batch files.

pub mod build_info;
pub mod config;
pub mod convert;
pub mod error;
pub mod logging;
pub mod models;
pub mod nutrition;
pub mod split;

pub use config::{ConvertConfig, SplitConfig};
pub use convert::{convert, convert_file, ConvertStats};
pub use error::{ImportError, ImportResult};
pub use split::{split, split_file, BatchFile, SplitStats};
