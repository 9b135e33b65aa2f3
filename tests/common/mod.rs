//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use git2::Repository;

use cz_custom::commit::Answers;
use cz_custom::config::CzConfig;
use cz_custom::error::{CommitError, PromptError};
use cz_custom::git::CommitSink;
use cz_custom::prompt::{Confirmation, Prompt};

/// Get the path to test fixtures directory.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// A test git repository builder for integration tests.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Create a new empty git repository with a committer identity.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Repository::init(dir.path()).expect("Failed to init git repo");

        let mut config = repo.config().expect("Failed to open repo config");
        config
            .set_str("user.name", "Test User")
            .expect("Failed to set user.name");
        config
            .set_str("user.email", "test@example.com")
            .expect("Failed to set user.email");

        Self { dir, repo }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file and add it to the index.
    pub fn stage(&self, name: &str, content: &str) {
        std::fs::write(self.dir.path().join(name), content).expect("Failed to write test file");
        let mut index = self.repo.index().expect("Failed to get index");
        index.add_path(Path::new(name)).expect("Failed to add file");
        index.write().expect("Failed to write index");
    }

    /// Message of the commit HEAD points to, if any.
    pub fn head_message(&self) -> Option<String> {
        let head = self.repo.head().ok()?.peel_to_commit().ok()?;
        head.message().map(str::to_string)
    }

    pub fn commit_count(&self) -> usize {
        let Ok(mut walk) = self.repo.revwalk() else {
            return 0;
        };
        if walk.push_head().is_err() {
            return 0;
        }
        walk.count()
    }
}

/// Prompt that replays fixed answers and a fixed confirmation.
pub struct ScriptedPrompt {
    pub answers: Answers,
    pub confirmation: Confirmation,
    pub previews: RefCell<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn new(answers: Answers, confirmation: Confirmation) -> Self {
        Self {
            answers,
            confirmation,
            previews: RefCell::new(Vec::new()),
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&self, _config: &CzConfig) -> Result<Answers, PromptError> {
        Ok(self.answers.clone())
    }

    fn confirm(&self, preview: &str) -> Result<Confirmation, PromptError> {
        self.previews.borrow_mut().push(preview.to_string());
        Ok(self.confirmation)
    }
}

/// Sink that records every message it receives.
#[derive(Default)]
pub struct RecordingSink {
    pub messages: RefCell<Vec<String>>,
}

impl CommitSink for RecordingSink {
    fn commit(&self, message: &str) -> Result<(), CommitError> {
        self.messages.borrow_mut().push(message.to_string());
        Ok(())
    }
}
