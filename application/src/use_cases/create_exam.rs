//! Create Exam use case.
//!
//! Draws a random subset of a loaded bank and hands it to an
//! [`ExamWriter`]:
//!
//! 1. Check the requested size against the bank
//! 2. Sample without replacement
//! 3. Write (creating or overwriting the output path)

use crate::ports::exam_writer::ExamWriter;
use assistant_domain::{DomainError, Exam, ExamSize, QuestionBank};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while creating an exam.
#[derive(Error, Debug)]
pub enum CreateExamError {
    /// The bank cannot supply the requested number of pairs.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Failed to write the exam file.
    #[error("Failed to write exam to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Input for the [`CreateExamUseCase`].
#[derive(Debug, Clone)]
pub struct CreateExamInput {
    /// Number of pairs to draw.
    pub size: ExamSize,
    /// Where to write the exam.
    pub output_path: PathBuf,
}

impl CreateExamInput {
    pub fn new(size: ExamSize, output_path: impl Into<PathBuf>) -> Self {
        Self {
            size,
            output_path: output_path.into(),
        }
    }
}

/// Output from the [`CreateExamUseCase`].
#[derive(Debug, Clone)]
pub struct CreateExamOutput {
    /// Path the exam was written to.
    pub path: PathBuf,
    /// Number of pairs written.
    pub pairs_written: usize,
}

/// Use case for sampling and writing an exam.
///
/// Owns its random number generator so a seeded instance produces the same
/// sequence of exams for the same sequence of inputs.
pub struct CreateExamUseCase {
    writer: Arc<dyn ExamWriter>,
    rng: StdRng,
}

impl CreateExamUseCase {
    /// Create with an entropy-seeded generator.
    pub fn new(writer: Arc<dyn ExamWriter>) -> Self {
        Self {
            writer,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create with a fixed seed for reproducible exams.
    pub fn with_seed(writer: Arc<dyn ExamWriter>, seed: u64) -> Self {
        Self {
            writer,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn execute(
        &mut self,
        bank: &QuestionBank,
        input: CreateExamInput,
    ) -> Result<CreateExamOutput, CreateExamError> {
        let exam = Exam::sample(bank, input.size, &mut self.rng)?;
        debug!("Sampled {} of {} pairs", exam.len(), bank.len());

        self.writer
            .write(&input.output_path, &exam)
            .map_err(|source| CreateExamError::Write {
                path: input.output_path.clone(),
                source,
            })?;

        info!(
            "Wrote exam with {} pairs to {}",
            exam.len(),
            input.output_path.display()
        );

        Ok(CreateExamOutput {
            path: input.output_path,
            pairs_written: exam.len(),
        })
    }
}
