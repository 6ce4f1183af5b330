//! Terminal prompt adapter.
//!
//! Implements [`PromptPort`] over stdin/stdout. Prompts are printed without
//! a trailing newline and the answer is read on the same line.

use assistant_application::{PromptError, PromptPort, Tone};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Interactive prompt backed by the process terminal.
pub struct TerminalPrompt {
    color: bool,
}

impl TerminalPrompt {
    pub fn new() -> Self {
        Self { color: true }
    }

    /// Set whether status lines are colored
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    fn style(&self, tone: Tone, message: &str) -> String {
        if !self.color {
            return message.to_string();
        }
        match tone {
            Tone::Plain => message.to_string(),
            Tone::Success => message.green().to_string(),
            Tone::Error => message.red().to_string(),
        }
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptPort for TerminalPrompt {
    fn ask(&self, prompt: &str) -> Result<String, PromptError> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;

        let mut input = String::new();
        let read = io::stdin().lock().read_line(&mut input)?;
        if read == 0 {
            return Err(PromptError::Closed);
        }

        Ok(strip_line_ending(&input).to_string())
    }

    fn say(&self, tone: Tone, message: &str) {
        println!("{}", self.style(tone, message));
    }
}

fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_line_ending() {
        assert_eq!(strip_line_ending("yes\n"), "yes");
        assert_eq!(strip_line_ending("yes\r\n"), "yes");
        assert_eq!(strip_line_ending("  yes  \n"), "  yes  ");
        assert_eq!(strip_line_ending("yes"), "yes");
    }

    #[test]
    fn test_style_without_color_is_verbatim() {
        let prompt = TerminalPrompt::new().with_color(false);
        assert_eq!(prompt.style(Tone::Error, "oops"), "oops");
        assert_eq!(prompt.style(Tone::Success, "done"), "done");
    }
}
