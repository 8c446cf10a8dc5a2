//! Error types shared across the generator

use crate::metadata::Field;
use std::path::PathBuf;
use thiserror::Error;

/// A rejected answer. Recoverable: the questionnaire re-asks the question.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct ValidationError {
    pub field: Field,
    pub reason: &'static str,
}

impl ValidationError {
    pub fn new(field: Field, reason: &'static str) -> Self {
        Self { field, reason }
    }
}

/// Failures of the input channel itself (never a bad answer)
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input closed before the questionnaire was finished")]
    InputClosed,

    /// Raised by non-interactive prompters that cannot re-ask a question
    #[error("invalid {field}: {reason}")]
    Rejected { field: Field, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Fatal errors that abort a run
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("source directory not found: {}", .0.display())]
    MissingSourceDir(PathBuf),

    #[error("invalid configuration in {}: {}", .path.display(), .message)]
    Config { path: PathBuf, message: String },

    #[error("failed to serialize manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("failed to write {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
