//! Input channels the questionnaire can talk to
//!
//! A [`Prompter`] asks one question at a time and returns the raw answer.
//! It never validates or applies defaults; that is the questionnaire's job.

use crate::error::{PromptError, ScaffoldError, ValidationError};
use crate::metadata::Field;
use colored::Colorize;
use std::collections::BTreeMap;
use std::io::{BufRead, Write};
use std::path::Path;

/// A single question presented to the user
#[derive(Debug, Clone, Copy)]
pub struct Question<'a> {
    pub field: Field,
    pub default: Option<&'a str>,
}

impl<'a> Question<'a> {
    pub fn new(field: Field, default: Option<&'a str>) -> Self {
        Self { field, default }
    }

    /// Question text with the default in brackets, e.g. `License [GPL-3.0+]`
    pub fn prompt(&self) -> String {
        match self.default {
            Some(default) => format!("{} [{}]", self.field.label(), default),
            None => self.field.label().to_string(),
        }
    }
}

/// Line-oriented prompt/response channel with a yes/no primitive
pub trait Prompter {
    /// Ask a question and return the raw answer (empty means "use the default")
    fn ask(&mut self, question: &Question<'_>) -> Result<String, PromptError>;

    /// Tell the user why an answer was refused; the question is asked again afterwards
    fn reject(&mut self, question: &Question<'_>, error: &ValidationError)
        -> Result<(), PromptError>;

    /// Yes/no confirmation
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, PromptError>;
}

/// Plain prompter over any reader/writer pair (stdin/stdout in `--plain` mode)
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the prompter and hand back the writer
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Result<String, PromptError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, question: &Question<'_>) -> Result<String, PromptError> {
        write!(self.output, "{}:\t", question.prompt())?;
        self.output.flush()?;
        self.read_line()
    }

    fn reject(
        &mut self,
        _question: &Question<'_>,
        error: &ValidationError,
    ) -> Result<(), PromptError> {
        writeln!(self.output, "{}", error.reason.red())?;
        Ok(())
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, PromptError> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };
        loop {
            write!(self.output, "{} {} ", message, hint)?;
            self.output.flush()?;
            match self.read_line()?.trim().to_lowercase().as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "Please answer yes or no.")?,
            }
        }
    }
}

/// Pre-recorded answers, for non-interactive runs.
///
/// Missing answers are empty (the default is used). A rejected answer is an
/// error since nobody is there to correct it.
#[derive(Debug, Clone, Default)]
pub struct AnswersPrompter {
    answers: BTreeMap<Field, String>,
}

impl AnswersPrompter {
    pub fn new(answers: BTreeMap<Field, String>) -> Self {
        Self { answers }
    }

    /// Load answers from a YAML mapping keyed by field (`package: acme/widget`)
    pub fn from_yaml_file(path: &Path) -> Result<Self, ScaffoldError> {
        let content = std::fs::read_to_string(path).map_err(|e| ScaffoldError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let answers = serde_yaml::from_str(&content).map_err(|e| ScaffoldError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(Self::new(answers))
    }
}

impl Prompter for AnswersPrompter {
    fn ask(&mut self, question: &Question<'_>) -> Result<String, PromptError> {
        Ok(self
            .answers
            .get(&question.field)
            .cloned()
            .unwrap_or_default())
    }

    fn reject(
        &mut self,
        question: &Question<'_>,
        error: &ValidationError,
    ) -> Result<(), PromptError> {
        Err(PromptError::Rejected {
            field: question.field,
            reason: error.reason.to_string(),
        })
    }

    fn confirm(&mut self, _message: &str, default: bool) -> Result<bool, PromptError> {
        Ok(default)
    }
}
