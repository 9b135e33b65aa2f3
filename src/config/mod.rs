//! Commit prompt configuration: types, scopes, prefixes and prompt texts.

pub mod loader;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub use loader::{CONFIG_ENV_VAR, CONFIG_FILE_NAME, load_config, read_config, resolve_config_path};

/// Footer prefix used when the config does not set one.
pub const DEFAULT_FOOTER_PREFIX: &str = "CLOSES";

/// Label of the breaking-change block when the config does not set one.
pub const DEFAULT_BREAKING_PREFIX: &str = "BREAKING CHANGE:";

/// A selectable commit type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeChoice {
    pub value: String,
    pub name: String,
}

impl TypeChoice {
    pub fn new(value: &str, description: &str) -> Self {
        let padding = " ".repeat(10usize.saturating_sub(value.len()));
        Self {
            value: value.to_string(),
            name: format!("{}:{}{}", value, padding, description),
        }
    }
}

/// A selectable scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeChoice {
    pub name: String,
}

/// Question texts shown by the interactive prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Messages {
    pub r#type: String,
    pub scope: String,
    pub custom_scope: String,
    pub subject: String,
    pub body: String,
    pub breaking: String,
    pub footer: String,
    pub pivotal_tag: String,
    pub pivotal_id: String,
    pub confirm_commit: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            r#type: "Select the type of change that you're committing:".to_string(),
            scope: "Denote the SCOPE of this change (optional):".to_string(),
            custom_scope: "Denote the SCOPE of this change:".to_string(),
            subject: "Write a SHORT, IMPERATIVE tense description of the change:".to_string(),
            body: "Provide a LONGER description of the change (optional). Use \"|\" to break new line:"
                .to_string(),
            breaking: "List any BREAKING CHANGES (optional):".to_string(),
            footer: "List any ISSUES CLOSED by this change (optional). E.g.: #31, #34:".to_string(),
            pivotal_tag: "Select the Pivotal Tracker action:".to_string(),
            pivotal_id: "List the Pivotal Tracker story IDs (comma separated):".to_string(),
            confirm_commit: "Are you sure you want to proceed with the commit above?".to_string(),
        }
    }
}

/// Full prompt and formatting configuration.
///
/// Every field has a default so a partial config file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CzConfig {
    pub types: Vec<TypeChoice>,
    pub scopes: Vec<ScopeChoice>,
    pub scope_overrides: HashMap<String, Vec<ScopeChoice>>,
    pub allow_custom_scopes: bool,
    pub allow_breaking_changes: Vec<String>,
    pub footer_prefix: Option<String>,
    pub breaking_prefix: Option<String>,
    pub pivotal: bool,
    pub pivotal_tags: Vec<String>,
    pub messages: Messages,
}

impl Default for CzConfig {
    fn default() -> Self {
        Self {
            types: vec![
                TypeChoice::new("feat", "A new feature"),
                TypeChoice::new("fix", "A bug fix"),
                TypeChoice::new("docs", "Documentation only changes"),
                TypeChoice::new("style", "Changes that do not affect the meaning of the code"),
                TypeChoice::new(
                    "refactor",
                    "A code change that neither fixes a bug nor adds a feature",
                ),
                TypeChoice::new("perf", "A code change that improves performance"),
                TypeChoice::new("test", "Adding missing tests"),
                TypeChoice::new("chore", "Changes to the build process or auxiliary tools"),
                TypeChoice::new("revert", "Revert to a commit"),
                TypeChoice::new("WIP", "Work in progress"),
            ],
            scopes: Vec::new(),
            scope_overrides: HashMap::new(),
            allow_custom_scopes: true,
            allow_breaking_changes: vec!["feat".to_string(), "fix".to_string()],
            footer_prefix: None,
            breaking_prefix: None,
            pivotal: false,
            pivotal_tags: ["Starts", "Finishes", "Fixes", "Delivers"]
                .iter()
                .map(|t| t.to_string())
                .collect(),
            messages: Messages::default(),
        }
    }
}

impl CzConfig {
    /// Prefix written before each closed issue, e.g. `CLOSES #12`.
    pub fn footer_prefix(&self) -> &str {
        non_empty(self.footer_prefix.as_deref()).unwrap_or(DEFAULT_FOOTER_PREFIX)
    }

    /// Label heading the breaking-change block.
    pub fn breaking_prefix(&self) -> &str {
        non_empty(self.breaking_prefix.as_deref()).unwrap_or(DEFAULT_BREAKING_PREFIX)
    }

    /// Scopes offered for a commit type; a per-type override replaces the global list.
    pub fn scopes_for(&self, commit_type: &str) -> &[ScopeChoice] {
        self.scope_overrides
            .get(commit_type)
            .map(Vec::as_slice)
            .unwrap_or(self.scopes.as_slice())
    }

    /// Whether the breaking-change question is asked for this commit type.
    pub fn allows_breaking(&self, commit_type: &str) -> bool {
        self.allow_breaking_changes.iter().any(|t| t == commit_type)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
