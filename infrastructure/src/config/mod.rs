//! Configuration file loading for professor-assistant
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./assistant.toml` or `./.assistant.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/professor-assistant/config.toml`
//! 4. Default values

mod file_config;
mod loader;

pub use file_config::{FileConfig, FileExamConfig, FileOutputConfig};
pub use loader::ConfigLoader;
