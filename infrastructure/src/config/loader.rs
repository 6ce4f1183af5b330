//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_CONFIG_FILES: [&str; 2] = ["assistant.toml", ".assistant.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./assistant.toml` or `./.assistant.toml`
    /// 3. XDG config: `$XDG_CONFIG_HOME/professor-assistant/config.toml`
    /// 4. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns the expected path even if the file does not exist yet.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("professor-assistant").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// One line per config source, highest priority first, marking the
    /// files that exist
    pub fn source_lines(explicit: Option<&Path>) -> Vec<String> {
        let mark = |found: bool| if found { "[FOUND]" } else { "[     ]" };
        let mut lines = Vec::with_capacity(4);

        if let Some(path) = explicit {
            lines.push(format!("  {} --config: {}", mark(path.is_file()), path.display()));
        }

        match Self::project_config_path() {
            Some(path) => lines.push(format!("  {} Project:  {}", mark(true), path.display())),
            None => lines.push(format!(
                "  {} Project:  ./{}",
                mark(false),
                PROJECT_CONFIG_FILES.join(" or ./")
            )),
        }

        if let Some(path) = Self::global_config_path() {
            lines.push(format!("  {} Global:   {}", mark(path.exists()), path.display()));
        }

        lines.push(format!("  {} Default:  built-in defaults", mark(true)));
        lines
    }

    /// Print the config sources for `--show-config`
    pub fn print_config_sources(explicit: Option<&Path>) {
        println!("Configuration sources (highest priority first):");
        for line in Self::source_lines(explicit) {
            println!("{line}");
        }
    }
}
