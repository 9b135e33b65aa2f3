//! The interactive question flow.

use dialoguer::{Input, Select};

use crate::commit::Answers;
use crate::config::CzConfig;
use crate::error::PromptError;

const EMPTY_SCOPE: &str = "empty";
const CUSTOM_SCOPE: &str = "custom";

/// The user's answer to the final confirmation question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Yes,
    No,
    Edit,
}

impl Confirmation {
    const ALL: [Confirmation; 3] = [Confirmation::Yes, Confirmation::No, Confirmation::Edit];

    pub fn label(&self) -> &'static str {
        match self {
            Confirmation::Yes => "Yes",
            Confirmation::No => "No",
            Confirmation::Edit => "Edit message",
        }
    }
}

/// Collects commit answers from the user.
///
/// This abstraction allows mocking the terminal in tests.
#[cfg_attr(test, mockall::automock)]
pub trait Prompt {
    /// Ask every question that applies under `config`.
    fn ask(&self, config: &CzConfig) -> Result<Answers, PromptError>;

    /// Show the built message and ask whether to commit it.
    fn confirm(&self, preview: &str) -> Result<Confirmation, PromptError>;
}

/// Terminal prompt backed by dialoguer.
pub struct TerminalPrompt {
    confirm_text: String,
}

impl TerminalPrompt {
    pub fn new(config: &CzConfig) -> Self {
        Self {
            confirm_text: config.messages.confirm_commit.clone(),
        }
    }
}

impl Prompt for TerminalPrompt {
    fn ask(&self, config: &CzConfig) -> Result<Answers, PromptError> {
        let messages = &config.messages;

        let commit_type = select_type(config)?;
        let scope = ask_scope(config, &commit_type)?;

        let subject: String = Input::new()
            .with_prompt(messages.subject.as_str())
            .validate_with(|input: &String| -> Result<(), &str> {
                if input.trim().is_empty() {
                    Err("Subject is required")
                } else {
                    Ok(())
                }
            })
            .interact_text()?;

        let body = optional_input(&messages.body)?;

        let breaking = if config.allows_breaking(&commit_type) {
            optional_input(&messages.breaking)?
        } else {
            None
        };

        let mut answers = Answers {
            scope,
            body,
            breaking,
            ..Answers::new(&commit_type, &subject)
        };

        if config.pivotal {
            answers.pivotal_tag = select_pivotal_tag(config)?;
            answers.pivotal_id = optional_input(&messages.pivotal_id)?;
        } else {
            answers.footer = optional_input(&messages.footer)?;
        }

        Ok(answers)
    }

    fn confirm(&self, preview: &str) -> Result<Confirmation, PromptError> {
        println!();
        println!("###--------------------------------------------------------###");
        println!("{}", preview);
        println!("###--------------------------------------------------------###");
        println!();

        let labels: Vec<&str> = Confirmation::ALL.iter().map(|c| c.label()).collect();
        let index = Select::new()
            .with_prompt(self.confirm_text.as_str())
            .items(&labels)
            .default(0)
            .interact()?;

        Ok(Confirmation::ALL[index])
    }
}

fn select_type(config: &CzConfig) -> Result<String, PromptError> {
    if config.types.is_empty() {
        return Err(PromptError::NoTypes);
    }

    let labels: Vec<&str> = config.types.iter().map(|t| t.name.as_str()).collect();
    let index = Select::new()
        .with_prompt(config.messages.r#type.as_str())
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(config.types[index].value.clone())
}

/// Pick from the configured scopes, offering "empty" and "custom" when
/// custom scopes are allowed.
fn ask_scope(config: &CzConfig, commit_type: &str) -> Result<Option<String>, PromptError> {
    let scopes = config.scopes_for(commit_type);

    if scopes.is_empty() {
        return if config.allow_custom_scopes {
            optional_input(&config.messages.scope)
        } else {
            Ok(None)
        };
    }

    let mut labels: Vec<&str> = scopes.iter().map(|s| s.name.as_str()).collect();
    if config.allow_custom_scopes {
        labels.push(EMPTY_SCOPE);
        labels.push(CUSTOM_SCOPE);
    }

    let index = Select::new()
        .with_prompt(config.messages.scope.as_str())
        .items(&labels)
        .default(0)
        .interact()?;

    match labels[index] {
        _ if index < scopes.len() => Ok(Some(scopes[index].name.clone())),
        EMPTY_SCOPE => Ok(None),
        _ => optional_input(&config.messages.custom_scope),
    }
}

fn select_pivotal_tag(config: &CzConfig) -> Result<Option<String>, PromptError> {
    if config.pivotal_tags.is_empty() {
        return optional_input(&config.messages.pivotal_tag);
    }

    let index = Select::new()
        .with_prompt(config.messages.pivotal_tag.as_str())
        .items(&config.pivotal_tags)
        .default(0)
        .interact()?;

    Ok(Some(config.pivotal_tags[index].clone()))
}

/// Free-text question that may be left blank.
fn optional_input(prompt: &str) -> Result<Option<String>, PromptError> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;

    let value = value.trim();
    Ok((!value.is_empty()).then(|| value.to_string()))
}
