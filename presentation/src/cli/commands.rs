//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for professor-assistant
#[derive(Parser, Debug)]
#[command(name = "professor-assistant")]
#[command(author, version, about = "Build random exams from a question bank file")]
#[command(long_about = r#"
Professor Assistant builds exams from a question bank file.

A question bank is plain text where lines alternate between a question and
its answer. The assistant asks for the bank, how many pairs you want, and
where to save the exam, then writes a random selection of distinct pairs.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./assistant.toml    Project-level config
3. ~/.config/professor-assistant/config.toml   Global config

Example:
  professor-assistant
  professor-assistant --seed 42 --no-color
"#)]
pub struct Cli {
    /// Seed the question sampler for reproducible exams
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
