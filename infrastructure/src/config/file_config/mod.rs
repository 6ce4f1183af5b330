//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

mod exam;
mod output;

pub use exam::FileExamConfig;
pub use output::FileOutputConfig;

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Exam generation settings
    pub exam: FileExamConfig,
    /// Output settings
    pub output: FileOutputConfig,
}
