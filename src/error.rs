//! Error types for cz-custom modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from locating and reading the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors from the interactive question flow.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Prompt interaction failed: {0}")]
    Interaction(#[from] dialoguer::Error),

    #[error("No commit types configured")]
    NoTypes,
}

/// Errors from the external editor session.
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Editor '{0}' not found in PATH. Set VISUAL or EDITOR.")]
    NotFound(String),

    #[error("Editor command is empty")]
    EmptyCommand,

    #[error("Failed to prepare message file: {0}")]
    TempFile(#[source] std::io::Error),

    #[error("Failed to spawn editor '{program}': {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from recording the commit.
#[derive(Error, Debug)]
pub enum CommitError {
    #[error("Failed to open repository: {0}")]
    OpenRepository(#[source] git2::Error),

    #[error("Nothing staged to commit")]
    NothingStaged,

    #[error("Failed to read index: {0}")]
    IndexFailed(#[source] git2::Error),

    #[error("Failed to create commit: {0}")]
    CommitFailed(#[source] git2::Error),

    #[error("Git config error (missing user.name or user.email): {0}")]
    ConfigError(#[source] git2::Error),
}

/// Errors surfaced by the prompt-confirm-commit flow.
#[derive(Error, Debug)]
pub enum FlowError {
    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    Editor(#[from] EditorError),

    #[error(transparent)]
    Commit(#[from] CommitError),
}
