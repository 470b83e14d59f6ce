//! The fixed table of shell commands.
//!
//! Order matters twice: `help` lists commands in table order, and Tab
//! completion picks the first name in table order that extends the buffer.

use super::commands::{self, files, info, system, CommandContext, CommandResult, Handler};
use super::invocation::CommandInvocation;

/// A built-in command.
#[derive(Clone)]
pub struct Command {
    /// Name matched against the first token (lower-case)
    pub name: &'static str,
    /// How `help` spells the usage, e.g. `cat README.md`
    pub synopsis: &'static str,
    /// Optional argument placeholder shown after the synopsis, e.g. `[dir]`
    pub arg_hint: Option<&'static str>,
    pub description: &'static str,
    handler: Handler,
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("synopsis", &self.synopsis)
            .finish()
    }
}

impl Command {
    const fn new(
        name: &'static str,
        synopsis: &'static str,
        arg_hint: Option<&'static str>,
        description: &'static str,
        handler: Handler,
    ) -> Self {
        Self {
            name,
            synopsis,
            arg_hint,
            description,
            handler,
        }
    }

    pub fn run(&self, invocation: &CommandInvocation, ctx: &CommandContext<'_>) -> CommandResult {
        (self.handler)(invocation, ctx)
    }
}

/// Every built-in command, in help and completion order.
pub fn builtin_commands() -> Vec<Command> {
    vec![
        Command::new("help", "help", None, "Show this help message", info::help),
        Command::new("clear", "clear", None, "Clear the terminal", system::clear),
        Command::new(
            "whoami",
            "whoami",
            None,
            "Professional summary + tech stack",
            info::whoami,
        ),
        Command::new("ls", "ls", Some("[dir]"), "List directory contents", files::ls),
        Command::new(
            "cat",
            "cat README.md",
            None,
            "Project details with problem/decisions/outcome",
            files::cat,
        ),
        Command::new(
            "neofetch",
            "neofetch",
            None,
            "ASCII art + system info",
            info::neofetch,
        ),
        Command::new(
            "wget",
            "wget resume.pdf",
            None,
            "Download my resume",
            files::wget,
        ),
        Command::new(
            "journalctl",
            "journalctl -u growth",
            None,
            "Learning timeline",
            info::journalctl,
        ),
        Command::new(
            "sudo",
            "sudo hire me",
            None,
            "Confetti + hiring message 🎉",
            system::sudo,
        ),
        Command::new(
            "rm",
            "rm -rf /",
            None,
            "Glitch effect + recovery 💥",
            system::rm,
        ),
    ]
}

/// Lookup and dispatch over the built-in commands.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    commands: Vec<Command>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: builtin_commands(),
        }
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Command names in table order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.iter().map(|c| c.name)
    }

    /// Find a command by name, case-insensitively.
    pub fn find_by_name(&self, name: &str) -> Option<&Command> {
        self.commands
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// First command name that starts with `prefix` and is not equal to it.
    pub fn complete(&self, prefix: &str) -> Option<&'static str> {
        self.names()
            .find(|name| name.starts_with(prefix) && *name != prefix)
    }

    /// Run the handler for `invocation`, or the not-found text.
    pub fn dispatch(
        &self,
        invocation: &CommandInvocation,
        ctx: &CommandContext<'_>,
    ) -> CommandResult {
        match self.find_by_name(&invocation.name) {
            Some(command) => {
                tracing::debug!(
                    "Dispatching {} with {} args",
                    command.name,
                    invocation.args.len()
                );
                command.run(invocation, ctx)
            }
            None => {
                tracing::debug!("Unknown command: {}", invocation.name);
                commands::not_found(&invocation.name)
            }
        }
    }
}
