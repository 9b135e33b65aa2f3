//! Git operations: recording the confirmed commit.

pub mod commit;

pub use commit::{CommitSink, DryRun, GitCommitter, commit_staged, work_tree_root};
