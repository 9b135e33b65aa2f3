//! Integration tests for the confirm/edit/commit session against real repositories.

mod common;

use serial_test::serial;

use cz_custom::commit::Answers;
use cz_custom::config::{CzConfig, read_config};
use cz_custom::error::{CommitError, FlowError};
use cz_custom::git::GitCommitter;
use cz_custom::prompt::{
    Confirmation, ExternalEditor, Outcome, commit_answers, run_prompter,
};

use common::{RecordingSink, ScriptedPrompt, TestRepo, fixtures_dir};

fn fixture_config() -> CzConfig {
    read_config(&fixtures_dir().join("cz-config.json")).expect("Failed to read fixture config")
}

fn fixture_answers() -> Answers {
    let content = std::fs::read_to_string(fixtures_dir().join("answers.json"))
        .expect("Failed to read fixture answers");
    serde_json::from_str(&content).expect("Failed to parse fixture answers")
}

#[test]
fn test_confirmed_session_creates_commit() {
    let repo = TestRepo::new();
    repo.stage("feature.txt", "cool\n");

    let prompt = ScriptedPrompt::new(fixture_answers(), Confirmation::Yes);
    let editor = ExternalEditor::new("false");
    let outcome = run_prompter(
        &prompt,
        &editor,
        &GitCommitter::new(repo.path()),
        &fixture_config(),
    )
    .unwrap();

    let expected = "feat(myScope): create a new cool feature → #1, #2\n\n-line1\n-line2\n\nBREAKING CHANGE:\nbreaking\n\nFIXES: #1, FIXES: #2";
    assert_eq!(outcome, Outcome::Committed(expected.to_string()));
    assert_eq!(repo.head_message().as_deref(), Some(expected));
    assert_eq!(prompt.previews.borrow().as_slice(), [expected.to_string()]);
}

#[test]
fn test_declined_session_leaves_repository_untouched() {
    let repo = TestRepo::new();
    repo.stage("feature.txt", "cool\n");

    let prompt = ScriptedPrompt::new(fixture_answers(), Confirmation::No);
    let outcome = run_prompter(
        &prompt,
        &ExternalEditor::new("false"),
        &GitCommitter::new(repo.path()),
        &fixture_config(),
    )
    .unwrap();

    assert_eq!(outcome, Outcome::Cancelled);
    assert_eq!(repo.commit_count(), 0);
}

#[test]
fn test_backticks_reach_git_unescaped() {
    let repo = TestRepo::new();
    repo.stage("a.txt", "a\n");

    let answers = Answers::new("feat", "with backticks `here`");
    let message = commit_answers(&answers, &GitCommitter::new(repo.path()), &CzConfig::default())
        .unwrap();

    assert_eq!(message, "feat: with backticks \\\\`here\\\\`");
    assert_eq!(
        repo.head_message().as_deref(),
        Some("feat: with backticks `here`")
    );
}

#[test]
fn test_nothing_staged_is_reported() {
    let repo = TestRepo::new();

    let prompt = ScriptedPrompt::new(Answers::new("feat", "do it all"), Confirmation::Yes);
    let err = run_prompter(
        &prompt,
        &ExternalEditor::new("false"),
        &GitCommitter::new(repo.path()),
        &CzConfig::default(),
    )
    .unwrap_err();

    assert!(matches!(err, FlowError::Commit(CommitError::NothingStaged)));
}

#[test]
#[serial]
#[cfg(unix)]
fn test_edit_with_successful_editor_commits() {
    temp_env::with_vars([("VISUAL", None), ("EDITOR", Some("true"))], || {
        let prompt = ScriptedPrompt::new(
            Answers::new("feat", "create a new cool feature"),
            Confirmation::Edit,
        );
        let sink = RecordingSink::default();

        let outcome = run_prompter(
            &prompt,
            &ExternalEditor::from_env(),
            &sink,
            &CzConfig::default(),
        )
        .unwrap();

        assert_eq!(
            outcome,
            Outcome::Committed("feat: create a new cool feature".to_string())
        );
        assert_eq!(
            sink.messages.borrow().as_slice(),
            ["feat: create a new cool feature".to_string()]
        );
    });
}

#[test]
#[serial]
#[cfg(unix)]
fn test_edit_with_failing_editor_does_not_commit() {
    temp_env::with_vars([("VISUAL", None), ("EDITOR", Some("false"))], || {
        let prompt = ScriptedPrompt::new(
            Answers::new("feat", "create a new cool feature"),
            Confirmation::Edit,
        );
        let sink = RecordingSink::default();

        let outcome = run_prompter(
            &prompt,
            &ExternalEditor::from_env(),
            &sink,
            &CzConfig::default(),
        )
        .unwrap();

        assert_eq!(
            outcome,
            Outcome::EditorCancelled("feat: create a new cool feature".to_string())
        );
        assert!(sink.messages.borrow().is_empty());
    });
}

#[test]
fn test_fixture_config_scope_override() {
    let config = fixture_config();
    assert_eq!(config.scopes_for("fix")[0].name, "fixOverride");
    assert_eq!(config.scopes_for("feat")[0].name, "myScope");
    assert!(config.allows_breaking("feat"));
    assert!(!config.allows_breaking("fix"));
}
