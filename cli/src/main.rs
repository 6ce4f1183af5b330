//! CLI entrypoint for Professor Assistant
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use assistant_application::{
    CreateExamUseCase, ExamWriter, LoadBankUseCase, PromptPort, QuestionBankSource,
};
use assistant_infrastructure::{ConfigLoader, FileConfig, FileExamWriter, FileQuestionBankSource};
use assistant_presentation::{Cli, ExamSession, TerminalPrompt};
use clap::Parser;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Effective settings after merging config files with CLI flags
#[derive(Debug, Clone, PartialEq, Eq)]
struct Settings {
    seed: Option<u64>,
    color: bool,
}

impl Settings {
    fn resolve(cli: &Cli, config: &FileConfig) -> Self {
        Self {
            seed: cli.seed.or(config.exam.seed),
            color: config.output.color && !cli.no_color,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // Logs go to stderr so they never interleave with prompts on stdout
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let config = load_config(&cli)?;
    let settings = Settings::resolve(&cli, &config);
    debug!("Settings: {:?}", settings);

    info!("Starting Professor Assistant");

    // === Dependency Injection ===
    let prompt = Arc::new(TerminalPrompt::new().with_color(settings.color));
    let mut session = build_session(
        prompt,
        Arc::new(FileQuestionBankSource::new()),
        Arc::new(FileExamWriter::new()),
        settings.seed,
    );

    session.run().context("Exam session ended with an error")?;
    Ok(())
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    if cli.no_config {
        return Ok(ConfigLoader::load_defaults());
    }

    if let Some(path) = &cli.config {
        if !path.exists() {
            bail!("Config file not found: {}", path.display());
        }
    }

    ConfigLoader::load(cli.config.as_deref())
        .map_err(|e| anyhow!("{}", e))
        .context("Failed to load configuration")
}

fn build_session(
    prompt: Arc<dyn PromptPort>,
    source: Arc<dyn QuestionBankSource>,
    writer: Arc<dyn ExamWriter>,
    seed: Option<u64>,
) -> ExamSession {
    let create_exam = match seed {
        Some(seed) => {
            info!("Using fixed sampler seed {}", seed);
            CreateExamUseCase::with_seed(writer, seed)
        }
        None => CreateExamUseCase::new(writer),
    };

    ExamSession::new(prompt, LoadBankUseCase::new(source), create_exam)
}
