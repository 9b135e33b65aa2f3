//! Commit message assembly from prompt answers.

use tracing::debug;

use super::answers::Answers;
use super::footer::FooterMode;
use super::wrap::{MAX_LINE_WIDTH, wrap};
use crate::config::CzConfig;

const ESCAPED_BACKTICK: &str = r"\\`";

/// Build the full commit message for `answers`.
///
/// Produces:
/// ```text
/// type(scope): subject → #12
///
/// Wrapped body, with `|` turned into line breaks.
///
/// BREAKING CHANGE:
/// Wrapped breaking-change description.
///
/// CLOSES #12
/// ```
///
/// Sections without an answer are left out together with their blank line.
/// Backticks are escaped as `\\` + backtick so the message survives the
/// confirmation and edit steps of the commit host.
pub fn build_commit(answers: &Answers, config: &CzConfig) -> String {
    debug!("Footer answer: {:?}", answers.footer);

    let footer_mode = FooterMode::select(answers, config);

    let sections = [
        Some(header(answers, &footer_mode)),
        body(answers),
        breaking(answers, config),
        footer_mode.block(config),
    ];

    escape_special_chars(&assemble(sections))
}

/// Join the present sections with blank lines.
fn assemble<const N: usize>(sections: [Option<String>; N]) -> String {
    sections
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// `type(scope): subject`, capped at the line width, plus any issue marker.
fn header(answers: &Answers, footer_mode: &FooterMode<'_>) -> String {
    let full = format!(
        "{}{}{}",
        answers.r#type,
        scope_fragment(answers.scope()),
        answers.subject.trim()
    );
    let mut head: String = full.chars().take(MAX_LINE_WIDTH).collect();

    if let Some(marker) = footer_mode.header_marker() {
        head.push_str(&marker);
    }
    head
}

/// `(scope): `, or just `: ` when there is no scope (e.g. `WIP: ...`).
///
/// A blank scope is not absent: it still renders its parentheses.
fn scope_fragment(scope: Option<&str>) -> String {
    match scope {
        Some(scope) => format!("({}): ", scope.trim()),
        None => ": ".to_string(),
    }
}

fn body(answers: &Answers) -> Option<String> {
    let wrapped = wrap(answers.body()?, MAX_LINE_WIDTH);
    let body = wrapped.replace('|', "\n");
    (!body.is_empty()).then_some(body)
}

fn breaking(answers: &Answers, config: &CzConfig) -> Option<String> {
    let wrapped = wrap(answers.breaking()?, MAX_LINE_WIDTH);
    (!wrapped.is_empty()).then(|| format!("{}\n{}", config.breaking_prefix(), wrapped))
}

fn escape_special_chars(message: &str) -> String {
    message.replace('`', ESCAPED_BACKTICK)
}

/// Undo the backtick escaping before the message reaches git.
pub fn unescape_special_chars(message: &str) -> String {
    message.replace(ESCAPED_BACKTICK, "`")
}
