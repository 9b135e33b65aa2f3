//! Recording the final message as a git commit.

use std::path::{Path, PathBuf};

use git2::{ErrorCode, Oid, Repository};
use tracing::info;

use crate::commit::unescape_special_chars;
use crate::error::CommitError;

/// Receives the confirmed commit message.
///
/// This abstraction allows mocking the commit step in tests.
#[cfg_attr(test, mockall::automock)]
pub trait CommitSink {
    fn commit(&self, message: &str) -> Result<(), CommitError>;
}

/// Commits the currently staged changes of the repository containing `path`.
pub struct GitCommitter {
    path: PathBuf,
}

impl GitCommitter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CommitSink for GitCommitter {
    fn commit(&self, message: &str) -> Result<(), CommitError> {
        let repo = Repository::discover(&self.path).map_err(CommitError::OpenRepository)?;
        let oid = commit_staged(&repo, &unescape_special_chars(message))?;
        info!("Created commit {}", oid);
        Ok(())
    }
}

/// Prints the message instead of committing.
pub struct DryRun;

impl CommitSink for DryRun {
    fn commit(&self, message: &str) -> Result<(), CommitError> {
        println!("{}", message);
        Ok(())
    }
}

/// Create a commit on HEAD from the current index.
///
/// Works on an unborn branch (first commit). Returns
/// `CommitError::NothingStaged` when the index matches HEAD.
pub fn commit_staged(repo: &Repository, message: &str) -> Result<Oid, CommitError> {
    let mut index = repo.index().map_err(CommitError::IndexFailed)?;
    let tree_id = index.write_tree().map_err(CommitError::IndexFailed)?;
    let tree = repo.find_tree(tree_id).map_err(CommitError::CommitFailed)?;

    let parent = match repo.head() {
        Ok(head) => Some(head.peel_to_commit().map_err(CommitError::CommitFailed)?),
        Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => None,
        Err(e) => return Err(CommitError::CommitFailed(e)),
    };

    let unchanged = match &parent {
        Some(parent) => parent.tree_id() == tree_id,
        None => index.is_empty(),
    };
    if unchanged {
        return Err(CommitError::NothingStaged);
    }

    let sig = repo.signature().map_err(CommitError::ConfigError)?;
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .map_err(CommitError::CommitFailed)
}

/// The work tree root of the repository containing `path`, if any.
pub fn work_tree_root(path: &Path) -> Option<PathBuf> {
    let repo = Repository::discover(path).ok()?;
    repo.workdir().map(Path::to_path_buf)
}
