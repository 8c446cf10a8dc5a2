//! Jumpstart Core - questionnaire and boilerplate rewriting for WordPress plugins
//!
//! This library turns a checked-out plugin boilerplate into a named plugin.
//! It collects the plugin metadata through an ordered, validated questionnaire,
//! substitutes the answers into the boilerplate sources and generates the
//! `composer.json` manifest.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Validators, suggestions, file walking, token rewriting, manifest building
//! - **Layer 2: Workflow Orchestration** - `Questionnaire` driven through the `Prompter` trait, `session::run`
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use jumpstart_core::{templates, AnswersPrompter, GitIdentity, Questionnaire, ScaffoldConfig};
//!
//! let mut prompter = AnswersPrompter::from_yaml_file("answers.yaml".as_ref())?;
//! let metadata = Questionnaire::new(GitIdentity).run(&mut prompter)?;
//! let report = templates::apply(".".as_ref(), &metadata, &ScaffoldConfig::default())?;
//! ```

pub mod config;
pub mod error;
pub mod identity;
pub mod manifest;
pub mod metadata;
pub mod prompter;
pub mod questionnaire;
pub mod session;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::ScaffoldConfig;
pub use error::{PromptError, ScaffoldError, ValidationError};
pub use identity::{GitIdentity, Identity, IdentityProvider, StaticIdentity};
pub use manifest::Manifest;
pub use metadata::{Field, PluginMetadata};
pub use prompter::{AnswersPrompter, LinePrompter, Prompter, Question};
pub use questionnaire::{Questionnaire, QuestionnaireOptions};
pub use session::RunOptions;
pub use templates::{apply, ApplyReport};

#[cfg(feature = "tui")]
pub use tui::run;
