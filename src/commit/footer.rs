//! Footer selection and rendering: issue references or Pivotal Tracker stories.

use std::sync::LazyLock;

use regex_lite::Regex;

use super::answers::Answers;
use super::wrap::{MAX_LINE_WIDTH, wrap};
use crate::config::CzConfig;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s").expect("Invalid regex"));

/// Headers get an inline issue marker only for footers shorter than this.
const SHORT_FOOTER_LEN: usize = 10;

/// Which footer block a commit message carries.
///
/// Pivotal mode takes precedence: when the config enables it and both the
/// tag and the story IDs were answered, the free-text footer is ignored,
/// including the inline header marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterMode<'a> {
    Pivotal { tag: &'a str, ids: &'a str },
    IssueReference { footer: &'a str },
    None,
}

impl<'a> FooterMode<'a> {
    pub fn select(answers: &'a Answers, config: &CzConfig) -> Self {
        if config.pivotal {
            if let (Some(tag), Some(ids)) = (answers.pivotal_tag(), answers.pivotal_id()) {
                return FooterMode::Pivotal { tag, ids };
            }
        }

        match answers.footer() {
            Some(footer) => FooterMode::IssueReference { footer },
            None => FooterMode::None,
        }
    }

    /// Inline marker appended to the header, e.g. ` → #12`.
    pub fn header_marker(&self) -> Option<String> {
        match self {
            FooterMode::IssueReference { footer } if footer.chars().count() < SHORT_FOOTER_LEN => {
                if footer.contains('#') {
                    Some(format!(" → {}", footer))
                } else {
                    Some(format!(" → #{}", footer))
                }
            }
            _ => None,
        }
    }

    /// The trailing footer block, without the separating blank line.
    pub fn block(&self, config: &CzConfig) -> Option<String> {
        match self {
            FooterMode::Pivotal { tag, ids } => pivotal_block(tag, ids),
            FooterMode::IssueReference { footer } => {
                issue_reference_block(footer, config.footer_prefix())
            }
            FooterMode::None => None,
        }
    }
}

/// `CLOSES #1, CLOSES #2` for lists, `CLOSES <text>` otherwise.
fn issue_reference_block(footer: &str, prefix: &str) -> Option<String> {
    let wrapped = wrap(footer, MAX_LINE_WIDTH);
    if wrapped.is_empty() {
        return None;
    }

    if wrapped.contains(',') {
        let refs: Vec<String> = wrapped
            .split(',')
            .map(|token| format!("{} {}", prefix, WHITESPACE.replace_all(token, "")))
            .collect();
        Some(refs.join(", "))
    } else {
        Some(format!("{} {}", prefix, wrapped))
    }
}

/// `[Finishes #1], [Finishes #2]`; blank IDs are skipped.
fn pivotal_block(tag: &str, ids: &str) -> Option<String> {
    let stories: Vec<String> = ids
        .split(',')
        .map(|id| WHITESPACE.replace_all(id, "").into_owned())
        .filter(|id| !id.is_empty())
        .map(|id| {
            if id.starts_with('#') {
                format!("[{} {}]", tag, id)
            } else {
                format!("[{} #{}]", tag, id)
            }
        })
        .collect();

    if stories.is_empty() {
        None
    } else {
        Some(stories.join(", "))
    }
}
