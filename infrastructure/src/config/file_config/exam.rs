//! Exam configuration from TOML (`[exam]` section)

use serde::{Deserialize, Serialize};

/// Raw exam configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileExamConfig {
    /// Fixed seed for the sampler; entropy-seeded when absent
    pub seed: Option<u64>,
}
