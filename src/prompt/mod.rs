//! Interactive commit session: questions, confirmation and the edit step.

pub mod editor;
pub mod flow;
pub mod questions;

pub use editor::{EditOutcome, EditSession, ExternalEditor};
pub use flow::{Outcome, commit_answers, run_prompter};
pub use questions::{Confirmation, Prompt, TerminalPrompt};
