//! Ask, build, confirm, then hand the message to the commit step.

use tracing::info;

use super::editor::{EditOutcome, EditSession};
use super::questions::{Confirmation, Prompt};
use crate::commit::{Answers, build_commit};
use crate::config::CzConfig;
use crate::error::{CommitError, FlowError};
use crate::git::CommitSink;

/// How a prompt session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The message (as built or as edited) was committed.
    Committed(String),
    /// The user declined at the confirmation question.
    Cancelled,
    /// The editor exited unsuccessfully; carries the unedited message.
    EditorCancelled(String),
}

/// Run one interactive commit session.
///
/// The sink is only called for a confirmed message. An edit session that is
/// cancelled never reaches the sink.
pub fn run_prompter<P, E, S>(
    prompt: &P,
    editor: &E,
    sink: &S,
    config: &CzConfig,
) -> Result<Outcome, FlowError>
where
    P: Prompt + ?Sized,
    E: EditSession + ?Sized,
    S: CommitSink + ?Sized,
{
    let answers = prompt.ask(config)?;
    let message = build_commit(&answers, config);

    match prompt.confirm(&message)? {
        Confirmation::Yes => {
            sink.commit(&message)?;
            Ok(Outcome::Committed(message))
        }
        Confirmation::Edit => match editor.edit(&message)? {
            EditOutcome::Accepted(edited) => {
                sink.commit(&edited)?;
                Ok(Outcome::Committed(edited))
            }
            EditOutcome::Cancelled => {
                info!("Editor returned non zero value, commit not created");
                Ok(Outcome::EditorCancelled(message))
            }
        },
        Confirmation::No => {
            info!("Commit has been canceled");
            Ok(Outcome::Cancelled)
        }
    }
}

/// Build and commit pre-collected answers without asking anything.
pub fn commit_answers<S>(
    answers: &Answers,
    sink: &S,
    config: &CzConfig,
) -> Result<String, CommitError>
where
    S: CommitSink + ?Sized,
{
    let message = build_commit(answers, config);
    sink.commit(&message)?;
    Ok(message)
}
