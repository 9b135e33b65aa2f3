//! cz-custom - CLI entry point.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cz_custom::commit::Answers;
use cz_custom::config::load_config;
use cz_custom::git::{CommitSink, DryRun, GitCommitter};
use cz_custom::prompt::{ExternalEditor, Outcome, TerminalPrompt, commit_answers, run_prompter};

/// Environment variable holding the log filter, e.g. `cz_custom=debug`.
const LOG_ENV_VAR: &str = "CZ_CUSTOM_LOG";

/// Build a Conventional Commits message interactively and commit it.
#[derive(Parser, Debug)]
#[command(name = "cz-custom")]
#[command(about = "Build a Conventional Commits message interactively and commit it")]
#[command(version)]
struct Cli {
    /// Path to a JSON config file (defaults to .cz-config.json lookup)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Build the message from a JSON answers file instead of asking
    #[arg(long)]
    answers: Option<PathBuf>,

    /// Print the message instead of committing
    #[arg(long)]
    dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let config = load_config(cli.config.as_deref(), &cwd).context("Failed to load config")?;

    let sink: Box<dyn CommitSink> = if cli.dry_run {
        Box::new(DryRun)
    } else {
        Box::new(GitCommitter::new(&cwd))
    };

    if let Some(path) = cli.answers {
        let answers = read_answers(&path)?;
        commit_answers(&answers, sink.as_ref(), &config).context("Failed to commit")?;
        return Ok(());
    }

    let prompt = TerminalPrompt::new(&config);
    let editor = ExternalEditor::from_env();

    match run_prompter(&prompt, &editor, sink.as_ref(), &config)? {
        Outcome::Committed(_) if cli.dry_run => {}
        Outcome::Committed(_) => println!("✓ Commit created"),
        Outcome::Cancelled => println!("Commit has been canceled."),
        Outcome::EditorCancelled(message) => {
            println!(
                "Editor returned non zero value. Commit message was:\n{}",
                message
            );
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("cz_custom=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_answers(path: &Path) -> Result<Answers> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read answers file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse answers file {}", path.display()))
}
