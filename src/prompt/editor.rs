//! Editing the built message in an external editor before committing.

use std::env;
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

use tracing::{debug, warn};

use crate::error::EditorError;

/// Editor used when neither `VISUAL` nor `EDITOR` is set.
const DEFAULT_EDITOR: &str = "vi";

/// Result of an edit session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The (possibly modified) text the user saved.
    Accepted(String),
    /// The editor exited unsuccessfully; nothing should be committed.
    Cancelled,
}

/// Lets the user revise a message.
///
/// This abstraction allows mocking the editor process in tests.
#[cfg_attr(test, mockall::automock)]
pub trait EditSession {
    fn edit(&self, initial: &str) -> Result<EditOutcome, EditorError>;
}

/// Runs an external editor on a temporary file.
#[derive(Debug, Clone)]
pub struct ExternalEditor {
    command: String,
}

impl ExternalEditor {
    /// `command` may carry arguments, e.g. `code --wait`. A program path with
    /// spaces needs no quoting; quoted arguments are not supported.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Pick the editor from `VISUAL`, then `EDITOR`, then `vi`.
    pub fn from_env() -> Self {
        let command = ["VISUAL", "EDITOR"]
            .iter()
            .filter_map(|var| env::var(var).ok())
            .find(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_EDITOR.to_string());
        Self::new(command)
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Split the command into the editor program and its arguments.
    ///
    /// The longest whitespace-delimited prefix that resolves to an executable
    /// is the program, so `/Applications/Sublime Text.app/.../subl -w` works
    /// without quoting. Quotes are not interpreted.
    fn resolve(&self) -> Result<(PathBuf, Vec<&str>), EditorError> {
        let command = self.command.trim();
        let first = command
            .split_whitespace()
            .next()
            .ok_or(EditorError::EmptyCommand)?;

        let mut ends: Vec<usize> = command
            .char_indices()
            .filter(|(_, c)| c.is_whitespace())
            .map(|(i, _)| i)
            .collect();
        ends.push(command.len());

        for &end in ends.iter().rev() {
            let program = command[..end].trim_end();
            if let Ok(path) = which::which(program) {
                return Ok((path, command[end..].split_whitespace().collect()));
            }
        }

        Err(EditorError::NotFound(first.to_string()))
    }
}

impl EditSession for ExternalEditor {
    fn edit(&self, initial: &str) -> Result<EditOutcome, EditorError> {
        let (program_path, args) = self.resolve()?;

        let mut file = tempfile::Builder::new()
            .prefix("COMMIT_EDITMSG-")
            .tempfile()
            .map_err(EditorError::TempFile)?;
        file.write_all(initial.as_bytes())
            .and_then(|_| file.flush())
            .map_err(EditorError::TempFile)?;

        debug!("Opening {} with {}", file.path().display(), program_path.display());

        let status = Command::new(&program_path)
            .args(&args)
            .arg(file.path())
            .status()
            .map_err(|source| EditorError::SpawnFailed {
                program: program_path.display().to_string(),
                source,
            })?;

        if !status.success() {
            warn!("Editor exited with {}", status);
            return Ok(EditOutcome::Cancelled);
        }

        let edited = std::fs::read_to_string(file.path()).map_err(EditorError::TempFile)?;
        Ok(EditOutcome::Accepted(
            edited.trim_end_matches(['\n', '\r']).to_string(),
        ))
    }
}
