//! Run configuration
//!
//! File locations and batch size for the converter and splitter. The
//! binaries run with the defaults.

use std::path::PathBuf;

use crate::error::{ImportError, ImportResult};

/// MyFoodData export read by the converter
pub const DEFAULT_SOURCE_FILE: &str =
    "MyFoodData Nutrition Facts SpreadSheet Release 1.4 - SR Legacy and FNDDS.csv";

/// SparkyFitness import file written by the converter and read by the splitter
pub const DEFAULT_TARGET_FILE: &str = "sparkyfitness_foods.csv";

/// Directory the splitter writes batch files into
pub const DEFAULT_BATCH_DIR: &str = "sparkyfitness_foods_batches";

/// Foods per batch file
pub const DEFAULT_BATCH_SIZE: usize = 2000;

/// Info lines at the top of the MyFoodData export, before the column header
pub const PREAMBLE_LINES: usize = 3;

/// Written rows between progress log lines
pub const PROGRESS_INTERVAL: usize = 1000;

/// Converter configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_SOURCE_FILE),
            output: PathBuf::from(DEFAULT_TARGET_FILE),
        }
    }
}

/// Splitter configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitConfig {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub batch_size: usize,
}

impl SplitConfig {
    /// Reject settings that cannot produce batches
    pub fn validate(&self) -> ImportResult<()> {
        if self.batch_size == 0 {
            return Err(ImportError::InvalidBatchSize);
        }
        Ok(())
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_TARGET_FILE),
            output_dir: PathBuf::from(DEFAULT_BATCH_DIR),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}
