//! End-to-end generator run without the TUI
//!
//! Used for `--plain` (line prompts on stdin/stdout) and `--answers`
//! (non-interactive). Output follows the same `colored` conventions as the
//! rest of the CLI.

use crate::config::ScaffoldConfig;
use crate::error::ScaffoldError;
use crate::identity::IdentityProvider;
use crate::manifest;
use crate::metadata::PluginMetadata;
use crate::prompter::Prompter;
use crate::questionnaire::Questionnaire;
use crate::templates::{self, ApplyReport, EntryPoint, FileStatus};
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Options shared by every front end
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Project root holding the boilerplate
    pub root: PathBuf,

    /// Explicit configuration file (defaults to `<root>/jumpstart.yaml`)
    pub config: Option<PathBuf>,

    /// Write the manifest without showing it for review
    pub yes: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            config: None,
            yes: false,
        }
    }
}

/// Load the configuration and check the project layout before asking anything
pub fn prepare(options: &RunOptions) -> Result<ScaffoldConfig, ScaffoldError> {
    let config = match &options.config {
        Some(path) => ScaffoldConfig::from_file(path)?,
        None => ScaffoldConfig::load(&options.root)?,
    };

    let source_dir = config.source_path(&options.root);
    if !source_dir.is_dir() {
        return Err(ScaffoldError::MissingSourceDir(source_dir));
    }

    Ok(config)
}

/// Ask the questions, rewrite the boilerplate and write the manifest
pub fn run<P, I>(prompter: &mut P, identity: I, options: &RunOptions) -> Result<PluginMetadata>
where
    P: Prompter + ?Sized,
    I: IdentityProvider,
{
    let config = prepare(options)?;

    println!();
    println!("{}", "Welcome to the Jumpstart plugin generator".cyan().bold());
    println!("This command will guide you through creating your basic plugin setup.");
    println!();

    let metadata = Questionnaire::new(identity)
        .with_options(config.questionnaire_options())
        .run(prompter)
        .context("Questionnaire was not completed")?;

    println!();
    for line in metadata.summary().lines() {
        println!("  {}", line.dimmed());
    }
    println!();

    let report = templates::apply(&options.root, &metadata, &config)?;
    print_report(&options.root, &report);

    let manifest = manifest::build(&metadata, &config);
    let write = if options.yes {
        true
    } else {
        println!();
        println!("{}", manifest.to_json()?);
        prompter
            .confirm(&format!("Write {}?", config.manifest_file), true)
            .context("Manifest review was not completed")?
    };

    if write {
        let path = manifest::write_manifest(&options.root, &manifest, &config)?;
        println!("{} {}", "Wrote".green().bold(), path.display());
    } else {
        println!("{} {}", "Skipped".yellow(), config.manifest_file);
    }

    println!();
    println!("  Next steps");
    println!();
    for (i, step) in next_steps(&metadata).iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    Ok(metadata)
}

/// Steps printed after a successful run
pub fn next_steps(metadata: &PluginMetadata) -> Vec<String> {
    vec![
        "composer install".to_string(),
        format!(
            "Activate \"{}\" in the WordPress admin",
            metadata.plugin_name
        ),
    ]
}

fn print_report(root: &Path, report: &ApplyReport) {
    println!(
        "{}",
        format!("Rewriting {} file(s)...", report.files.len())
            .cyan()
            .bold()
    );

    for file in &report.files {
        let path = display_path(root, &file.path);
        match &file.status {
            FileStatus::Rewritten { .. } => println!("  {} {} {}", "->".blue(), path, "done".green()),
            FileStatus::Failed(e) => {
                println!("  {} {} {}", "->".blue(), path, "Error".red());
                eprintln!("    Error: {}", e);
            }
        }
    }

    match &report.entry_point {
        EntryPoint::Renamed { from, to } => println!(
            "  {} {} -> {}",
            "Renamed".green(),
            display_path(root, from),
            display_path(root, to)
        ),
        EntryPoint::NotFound(path) => println!(
            "  {} {} not found, nothing to rename",
            "Note:".yellow(),
            display_path(root, path)
        ),
        EntryPoint::Failed { path, error } => {
            println!("  {} {} {}", "->".blue(), display_path(root, path), "Error".red());
            eprintln!("    Error: {}", error);
        }
    }

    if report.has_failures() {
        eprintln!(
            "{} some files could not be rewritten; fix them by hand",
            "Warning:".yellow()
        );
    }
}

fn display_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}
