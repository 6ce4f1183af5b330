//! Interactive exam session.
//!
//! Drives the conversation with the professor:
//!
//! ```text
//! GREETING
//!    ↓
//! ASK_CONTINUE ──No──→ EXIT
//!    │ Yes
//!    ↓
//! LOAD_BANK ──failed──→ ASK_CONTINUE
//!    ↓
//! CHOOSE_SIZE ──too many──→ ASK_CONTINUE
//!    ↓
//! WRITE_EXAM ──→ ASK_CONTINUE
//! ```
//!
//! The bank is reloaded from scratch on every "Yes". Recoverable problems
//! print one line and return to the nearest prompt; write failures and
//! unreadable bank files end the session with an error. Closing the input
//! stream ends the session quietly.

pub mod messages;
#[cfg(test)]
mod testing;
pub mod validator;

use assistant_application::{
    CreateExamError, CreateExamInput, CreateExamUseCase, LoadBankError, LoadBankUseCase,
    PromptError, PromptPort, Tone,
};
use assistant_domain::{ContinueChoice, DomainError, ExamSize, QuestionBank};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that end a session.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Prompt failed: {0}")]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    LoadBank(#[from] LoadBankError),

    #[error(transparent)]
    CreateExam(#[from] CreateExamError),
}

enum Step {
    AskContinue,
    LoadBank,
    ChooseSize(QuestionBank),
    WriteExam { bank: QuestionBank, size: ExamSize },
    Exit,
}

impl Step {
    fn label(&self) -> &'static str {
        match self {
            Step::AskContinue => "ask_continue",
            Step::LoadBank => "load_bank",
            Step::ChooseSize(_) => "choose_size",
            Step::WriteExam { .. } => "write_exam",
            Step::Exit => "exit",
        }
    }
}

/// Interactive exam session
pub struct ExamSession {
    prompt: Arc<dyn PromptPort>,
    load_bank: LoadBankUseCase,
    create_exam: CreateExamUseCase,
}

impl ExamSession {
    pub fn new(
        prompt: Arc<dyn PromptPort>,
        load_bank: LoadBankUseCase,
        create_exam: CreateExamUseCase,
    ) -> Self {
        Self {
            prompt,
            load_bank,
            create_exam,
        }
    }

    /// Run until the professor answers "No" or input is closed
    pub fn run(&mut self) -> Result<(), SessionError> {
        match self.run_steps() {
            Err(SessionError::Prompt(e)) if e.is_closed() => {
                debug!("Input closed, ending session");
                Ok(())
            }
            other => other,
        }
    }

    fn run_steps(&mut self) -> Result<(), SessionError> {
        let name = self.greet()?;

        let mut step = Step::AskContinue;
        loop {
            debug!("Session step: {}", step.label());
            step = match step {
                Step::AskContinue => self.ask_continue(&name)?,
                Step::LoadBank => self.request_bank()?,
                Step::ChooseSize(bank) => self.choose_size(bank)?,
                Step::WriteExam { bank, size } => self.write_exam(&bank, size)?,
                Step::Exit => return Ok(()),
            };
        }
    }

    fn greet(&self) -> Result<String, SessionError> {
        self.prompt.say(Tone::Plain, messages::WELCOME);
        let name = self.prompt.ask(messages::NAME_PROMPT)?.trim().to_string();
        self.prompt.say(Tone::Plain, &messages::greeting(&name));
        self.prompt.blank_line();
        Ok(name)
    }

    fn ask_continue(&self, name: &str) -> Result<Step, SessionError> {
        let answer = self.prompt.ask(messages::CONTINUE_PROMPT)?;
        match answer.parse::<ContinueChoice>() {
            Ok(ContinueChoice::Yes) => Ok(Step::LoadBank),
            Ok(ContinueChoice::No) => {
                self.prompt.say(Tone::Plain, &messages::farewell(name));
                Ok(Step::Exit)
            }
            Err(_) => {
                self.prompt.say(Tone::Error, messages::INVALID_CHOICE);
                self.prompt.blank_line();
                Ok(Step::AskContinue)
            }
        }
    }

    fn request_bank(&self) -> Result<Step, SessionError> {
        let path = self.prompt.ask(messages::BANK_PATH_PROMPT)?;
        match self.load_bank.execute(Path::new(path.trim())) {
            Ok(bank) => {
                self.prompt.say(Tone::Success, messages::BANK_LOADED);
                self.prompt
                    .say(Tone::Plain, &messages::pairs_available(bank.len()));
                Ok(Step::ChooseSize(bank))
            }
            Err(e) if e.is_recoverable() => {
                self.prompt.say(Tone::Error, &messages::load_failed(&e));
                Ok(Step::AskContinue)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn choose_size(&self, bank: QuestionBank) -> Result<Step, SessionError> {
        let size = validator::read_exam_size(self.prompt.as_ref())?;
        match size.ensure_within(&bank) {
            Ok(()) => Ok(Step::WriteExam { bank, size }),
            Err(DomainError::CountExceedsAvailable {
                requested,
                available,
            }) => {
                warn!("Requested {} pairs from a bank of {}", requested, available);
                self.prompt
                    .say(Tone::Error, &messages::count_exceeds(requested, available));
                self.prompt.say(Tone::Plain, messages::TRY_AGAIN);
                self.prompt.blank_line();
                Ok(Step::AskContinue)
            }
            Err(e) => Err(CreateExamError::from(e).into()),
        }
    }

    fn write_exam(&mut self, bank: &QuestionBank, size: ExamSize) -> Result<Step, SessionError> {
        let path = self.prompt.ask(messages::OUTPUT_PATH_PROMPT)?;
        let output = self
            .create_exam
            .execute(bank, CreateExamInput::new(size, path.trim()))?;

        self.prompt
            .say(Tone::Success, &messages::exam_created(&output.path));
        self.prompt.blank_line();
        Ok(Step::AskContinue)
    }
}
