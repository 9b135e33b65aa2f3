//! cz-custom - A customizable Conventional Commits message builder.
//!
//! # Overview
//!
//! cz-custom asks for the parts of a commit (type, scope, subject, body,
//! breaking change, closed issues or Pivotal Tracker stories), formats them
//! into a Conventional Commits message, lets the user confirm or edit it, and
//! records the commit with git.

pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod prompt;

// Re-export commonly used types
pub use commit::{Answers, FooterMode, build_commit};
pub use config::CzConfig;
pub use error::{CommitError, ConfigError, EditorError, FlowError, PromptError};
pub use prompt::{Confirmation, EditOutcome, Outcome, run_prompter};
