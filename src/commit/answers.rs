//! Answers collected by the prompt for a single commit.

use serde::{Deserialize, Serialize};

/// Raw answer set, as produced by the question flow or read from JSON.
///
/// `type` and `subject` are expected to be non-empty; optional fields that
/// are empty strings are treated the same as absent ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Answers {
    pub r#type: String,
    pub scope: Option<String>,
    pub subject: String,
    /// Free text; `|` marks an explicit line break.
    pub body: Option<String>,
    pub breaking: Option<String>,
    /// Free text or a comma separated list of issue references.
    pub footer: Option<String>,
    pub pivotal_tag: Option<String>,
    pub pivotal_id: Option<String>,
}

impl Answers {
    pub fn new(commit_type: &str, subject: &str) -> Self {
        Self {
            r#type: commit_type.to_string(),
            subject: subject.to_string(),
            ..Self::default()
        }
    }

    pub fn scope(&self) -> Option<&str> {
        present(&self.scope)
    }

    pub fn body(&self) -> Option<&str> {
        present(&self.body)
    }

    pub fn breaking(&self) -> Option<&str> {
        present(&self.breaking)
    }

    pub fn footer(&self) -> Option<&str> {
        present(&self.footer)
    }

    pub fn pivotal_tag(&self) -> Option<&str> {
        present(&self.pivotal_tag)
    }

    pub fn pivotal_id(&self) -> Option<&str> {
        present(&self.pivotal_id)
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.is_empty())
}
