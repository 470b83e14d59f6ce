//! Command handlers.
//!
//! Every handler is a plain function from an invocation and a read-only
//! [`CommandContext`] to a [`CommandResult`]. Handlers never fail: bad
//! arguments produce error *text*, and anything beyond text (clearing the
//! screen, effects, a pause) is carried as data on the result for the
//! session to act on.

pub mod files;
pub mod info;
pub mod system;

use super::invocation::CommandInvocation;
use crate::config::ShellConfig;
use crate::content::ContentData;
use crate::model::markup::{Line, Markup, Tag};
use crate::services::effects::SideEffect;
use std::time::Duration;

/// What a command shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Append this text to the transcript
    DisplayText(Markup),
    /// Empty the transcript
    ClearScreen,
    NoOutput,
}

/// Outcome of one dispatched command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub output: CommandOutput,
    /// Fired before the output is shown
    pub effects: Vec<SideEffect>,
    /// Suspension between firing effects and showing output
    pub pause: Option<Duration>,
}

impl CommandResult {
    pub fn text(markup: Markup) -> Self {
        Self {
            output: CommandOutput::DisplayText(markup),
            effects: Vec::new(),
            pause: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::text(Markup::error(message))
    }

    pub fn clear_screen() -> Self {
        Self {
            output: CommandOutput::ClearScreen,
            effects: Vec::new(),
            pause: None,
        }
    }

    pub fn no_output() -> Self {
        Self {
            output: CommandOutput::NoOutput,
            effects: Vec::new(),
            pause: None,
        }
    }

    pub fn with_effect(mut self, effect: SideEffect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = Some(pause);
        self
    }

    /// The displayed markup, if any.
    pub fn markup(&self) -> Option<&Markup> {
        match &self.output {
            CommandOutput::DisplayText(markup) => Some(markup),
            _ => None,
        }
    }

    /// True for results whose text is a single error line.
    pub fn is_error(&self) -> bool {
        self.markup().is_some_and(|m| m.has_tag(Tag::Error))
    }
}

/// Read-only inputs available to every handler.
#[derive(Debug, Clone, Copy)]
pub struct CommandContext<'a> {
    pub content: &'a ContentData,
    /// Time since the process started
    pub uptime: Duration,
    pub shell: &'a ShellConfig,
}

impl<'a> CommandContext<'a> {
    pub fn new(content: &'a ContentData, uptime: Duration, shell: &'a ShellConfig) -> Self {
        Self {
            content,
            uptime,
            shell,
        }
    }
}

/// Handler signature shared by every built-in command.
pub type Handler = fn(&CommandInvocation, &CommandContext<'_>) -> CommandResult;

/// Text for names the registry does not know.
pub fn not_found(name: &str) -> CommandResult {
    CommandResult::text(
        Markup::error(format!("zsh: command not found: {}", name)).with(Line::tagged(
            "Type 'help' for available commands",
            Tag::Muted,
        )),
    )
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_names_the_command() {
        let result = not_found("vim");
        let markup = result.markup().unwrap();
        assert_eq!(
            markup.text(),
            "zsh: command not found: vim\nType 'help' for available commands"
        );
        assert!(result.is_error());
        assert!(result.effects.is_empty());
    }

    #[test]
    fn test_builders() {
        let result = CommandResult::clear_screen()
            .with_effect(SideEffect::Flash)
            .with_pause(Duration::from_millis(5));
        assert_eq!(result.output, CommandOutput::ClearScreen);
        assert_eq!(result.effects, vec![SideEffect::Flash]);
        assert!(result.markup().is_none());
        assert!(!result.is_error());
    }
}
