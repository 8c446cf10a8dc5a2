//! Charm-style CLI prompts using cliclack

use crate::error::{PromptError, ValidationError};
use crate::identity::IdentityProvider;
use crate::manifest;
use crate::metadata::PluginMetadata;
use crate::prompter::{Prompter, Question};
use crate::questionnaire::Questionnaire;
use crate::session::{self, RunOptions};
use crate::templates::{self, ApplyReport, EntryPoint, FileStatus};
use anyhow::{Context, Result};
use std::path::Path;

/// [`Prompter`] backed by cliclack inputs
#[derive(Debug, Default, Clone, Copy)]
pub struct CliclackPrompter;

impl Prompter for CliclackPrompter {
    fn ask(&mut self, question: &Question<'_>) -> Result<String, PromptError> {
        let mut input = cliclack::input(question.field.label()).required(false);
        if let Some(default) = question.default {
            input = input.placeholder(default);
        }
        Ok(input.interact()?)
    }

    fn reject(
        &mut self,
        _question: &Question<'_>,
        error: &ValidationError,
    ) -> Result<(), PromptError> {
        cliclack::log::error(error.reason)?;
        Ok(())
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, PromptError> {
        Ok(cliclack::confirm(message).initial_value(default).interact()?)
    }
}

/// Run the generator with interactive prompts
pub fn run<I: IdentityProvider>(identity: I, options: &RunOptions) -> Result<PluginMetadata> {
    cliclack::intro("Jumpstart plugin generator")?;

    // Step 1: Configuration and project layout
    let config = session::prepare(options)?;
    cliclack::log::info(format!(
        "Rewriting *.{} files under {}",
        config.extension,
        config.source_path(&options.root).display()
    ))?;

    // Step 2: Questionnaire
    let mut prompter = CliclackPrompter;
    let metadata = Questionnaire::new(identity)
        .with_options(config.questionnaire_options())
        .run(&mut prompter)
        .context("Questionnaire was not completed")?;
    cliclack::note("Plugin metadata", metadata.summary())?;

    // Step 3: Rewrite boilerplate
    let spinner = cliclack::spinner();
    spinner.start("Rewriting boilerplate...");
    let report = templates::apply(&options.root, &metadata, &config)?;
    spinner.stop(format!(
        "Rewrote {} of {} files",
        report.rewritten(),
        report.files.len()
    ));
    log_report(&options.root, &report)?;

    // Step 4: Manifest
    let manifest = manifest::build(&metadata, &config);
    let write = if options.yes {
        true
    } else {
        cliclack::note(&config.manifest_file, manifest.to_json()?)?;
        prompter.confirm(&format!("Write {}?", config.manifest_file), true)?
    };
    if write {
        let path = manifest::write_manifest(&options.root, &manifest, &config)?;
        cliclack::log::success(format!("Wrote {}", path.display()))?;
    } else {
        cliclack::log::warning(format!("Skipped {}", config.manifest_file))?;
    }

    // Step 5: Show next steps
    print_next_steps(&metadata)?;

    Ok(metadata)
}

fn log_report(root: &Path, report: &ApplyReport) -> Result<()> {
    let relative = |path: &Path| path.strip_prefix(root).unwrap_or(path).display().to_string();

    for file in &report.files {
        if let FileStatus::Failed(e) = &file.status {
            cliclack::log::error(format!("{}  Error: {}", relative(&file.path), e))?;
        }
    }

    match &report.entry_point {
        EntryPoint::Renamed { from, to } => {
            cliclack::log::success(format!("Renamed {} to {}", relative(from), relative(to)))?;
        }
        EntryPoint::NotFound(path) => {
            cliclack::log::info(format!("{} not found, nothing to rename", relative(path)))?;
        }
        EntryPoint::Failed { path, error } => {
            cliclack::log::error(format!("{}  Error: {}", relative(path), error))?;
        }
    }

    Ok(())
}

fn print_next_steps(metadata: &PluginMetadata) -> Result<()> {
    let steps = session::next_steps(metadata);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
