//! Jumpstart CLI - turn the plugin boilerplate into a named WordPress plugin

use anyhow::Result;
use clap::{Parser, Subcommand};
use jumpstart_core::{AnswersPrompter, GitIdentity, LinePrompter, Questionnaire, RunOptions};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "jumpstart")]
#[command(about = "CLI for generating WordPress plugins from the Jumpstart boilerplate")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Ask for the plugin metadata and rewrite the boilerplate (default)
    Init(InitArgs),
    /// Validate an answers file and print the resulting metadata without touching any file
    Check(CheckArgs),
}

#[derive(Parser, Debug, Default)]
pub struct InitArgs {
    /// Project root holding the boilerplate
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,

    /// Configuration file (defaults to <dir>/jumpstart.yaml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Read answers from a YAML file instead of prompting
    #[arg(long)]
    pub answers: Option<PathBuf>,

    /// Use plain line prompts on stdin/stdout instead of the interactive UI
    #[arg(long)]
    pub plain: bool,

    /// Write composer.json without showing it for review
    #[arg(short, long)]
    pub yes: bool,
}

impl From<&InitArgs> for RunOptions {
    fn from(args: &InitArgs) -> Self {
        RunOptions {
            root: args.dir.clone(),
            config: args.config.clone(),
            yes: args.yes,
        }
    }
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Answers file to validate
    pub answers: PathBuf,

    /// Ask for the author email as a separate answer
    #[arg(long = "author-email")]
    pub author_email: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    match args.command {
        Some(Command::Init(init_args)) => init(&init_args),
        Some(Command::Check(check_args)) => check(&check_args),
        None => {
            // No subcommand provided, default to init behavior (interactive mode)
            let init_args = InitArgs {
                dir: PathBuf::from("."),
                ..Default::default()
            };
            init(&init_args)
        }
    }
}

fn init(args: &InitArgs) -> Result<()> {
    let options = RunOptions::from(args);
    tracing::debug!(?options, "starting generator");

    if let Some(path) = &args.answers {
        let mut prompter = AnswersPrompter::from_yaml_file(path)?;
        jumpstart_core::session::run(&mut prompter, GitIdentity, &options)?;
    } else if args.plain {
        let mut prompter = LinePrompter::new(io::stdin().lock(), io::stdout());
        jumpstart_core::session::run(&mut prompter, GitIdentity, &options)?;
    } else {
        let result = jumpstart_core::run(GitIdentity, &options);

        // Ensure cursor is visible on normal exit
        let _ = console::Term::stderr().show_cursor();

        result?;
    }

    Ok(())
}

fn check(args: &CheckArgs) -> Result<()> {
    let mut prompter = AnswersPrompter::from_yaml_file(&args.answers)?;
    let metadata = Questionnaire::new(GitIdentity)
        .with_options(jumpstart_core::QuestionnaireOptions {
            ask_author_email: args.author_email,
        })
        .run(&mut prompter)?;

    print!("{}", metadata.to_yaml()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_init_args() {
        let args = Args::parse_from(["jumpstart", "init", "--dir", "plugin", "--plain", "-y"]);
        match args.command {
            Some(Command::Init(init)) => {
                let options = RunOptions::from(&init);
                assert_eq!(options.root, PathBuf::from("plugin"));
                assert!(options.yes);
                assert!(init.plain);
                assert!(init.answers.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_check_args() {
        let args = Args::parse_from(["jumpstart", "check", "answers.yaml", "--author-email"]);
        match args.command {
            Some(Command::Check(check)) => {
                assert_eq!(check.answers, PathBuf::from("answers.yaml"));
                assert!(check.author_email);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
