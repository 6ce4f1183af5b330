//! In-memory doubles for driving a session in tests

use assistant_application::{
    ExamWriter, LoadBankError, PromptError, PromptPort, QuestionBankSource, Tone,
};
use assistant_domain::{Exam, QuestionBank};
use std::collections::{HashMap, VecDeque};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Prompt that replays scripted answers and records everything shown.
///
/// Reports [`PromptError::Closed`] once the script runs out.
pub struct ScriptedPrompt {
    answers: Mutex<VecDeque<String>>,
    asked: Mutex<Vec<String>>,
    said: Mutex<Vec<(Tone, String)>>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: Mutex::new(answers.into_iter().map(Into::into).collect()),
            asked: Mutex::new(Vec::new()),
            said: Mutex::new(Vec::new()),
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }

    /// Non-blank lines shown to the user
    pub fn said(&self) -> Vec<String> {
        self.said
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, line)| !line.is_empty())
            .map(|(_, line)| line.clone())
            .collect()
    }

    pub fn said_with_tone(&self, tone: Tone) -> Vec<String> {
        self.said
            .lock()
            .unwrap()
            .iter()
            .filter(|(t, line)| *t == tone && !line.is_empty())
            .map(|(_, line)| line.clone())
            .collect()
    }
}

impl PromptPort for ScriptedPrompt {
    fn ask(&self, prompt: &str) -> Result<String, PromptError> {
        self.asked.lock().unwrap().push(prompt.to_string());
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(PromptError::Closed)
    }

    fn say(&self, tone: Tone, message: &str) {
        self.said.lock().unwrap().push((tone, message.to_string()));
    }
}

/// Bank source serving fixed file contents by path
#[derive(Default)]
pub struct InMemoryBankSource {
    files: HashMap<PathBuf, String>,
}

impl InMemoryBankSource {
    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), content.to_string());
        self
    }
}

impl QuestionBankSource for InMemoryBankSource {
    fn load(&self, path: &Path) -> Result<QuestionBank, LoadBankError> {
        let text = self
            .files
            .get(path)
            .ok_or_else(|| LoadBankError::NotFound(path.to_path_buf()))?;
        Ok(QuestionBank::from_text(text)?)
    }
}

/// Writer that keeps rendered exams in memory
#[derive(Default)]
pub struct RecordingWriter {
    written: Mutex<Vec<(PathBuf, String)>>,
}

impl RecordingWriter {
    pub fn written(&self) -> Vec<(PathBuf, String)> {
        self.written.lock().unwrap().clone()
    }
}

impl ExamWriter for RecordingWriter {
    fn write(&self, path: &Path, exam: &Exam) -> io::Result<()> {
        self.written
            .lock()
            .unwrap()
            .push((path.to_path_buf(), exam.render()));
        Ok(())
    }
}
