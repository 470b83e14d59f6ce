//! The interactive shell session.
//!
//! [`ShellSession`] owns everything the terminal view needs: the line
//! editor (and its history), the transcript, the command registry and a
//! shared handle to the content. It never draws; whenever the visible state
//! changes mid-operation it asks its [`ShellHost`] to refresh.

use super::intro::typewrite;
use super::transcript::Transcript;
use crate::config::ShellConfig;
use crate::content::ContentData;
use crate::input::command_registry::CommandRegistry;
use crate::input::commands::{CommandContext, CommandOutput, CommandResult};
use crate::input::invocation::CommandInvocation;
use crate::input::line_editor::{EditKey, EditOutcome, LineEditor};
use crate::model::markup::{Line, Span, Tag};
use crate::services::effects::SideEffect;
use crate::services::time_source::SharedTimeSource;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Longest uninterrupted sleep while the host is waiting on the session.
///
/// Long pauses are sliced so running effects keep animating.
const FRAME: Duration = Duration::from_millis(50);

/// Collaborator that shows the session and performs its effects.
pub trait ShellHost {
    fn fire(&mut self, effect: SideEffect);

    /// Redraw using the session's current state.
    fn refresh(&mut self, session: &ShellSession);
}

/// Prompt segments without the command.
pub fn prompt_segments(shell: &ShellConfig) -> Line {
    Line::tagged(" linux ", Tag::PromptOs)
        .with(format!(" {} ", shell.prompt_dir), Tag::PromptDir)
        .with(format!(" ⎇ {} ", shell.git_branch), Tag::PromptGit)
        .with(" ", Tag::Plain)
}

/// Prompt echo for an executed command.
pub fn prompt_line(shell: &ShellConfig, command: &str) -> Line {
    prompt_segments(shell).with(command, Tag::PromptInput)
}

fn intro_hint() -> Line {
    Line::tagged("Type ", Tag::Muted)
        .with("help", Tag::CommandName)
        .with(" to see available commands", Tag::Muted)
}

pub struct ShellSession {
    editor: LineEditor,
    transcript: Transcript,
    registry: CommandRegistry,
    content: Arc<ContentData>,
    shell: ShellConfig,
    time: SharedTimeSource,
    started_at: Instant,
    /// False until the intro has finished
    accepting: bool,
    /// True while a command is suspended (e.g. `rm -rf /`)
    busy: bool,
}

impl std::fmt::Debug for ShellSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShellSession")
            .field("buffer", &self.editor.buffer())
            .field("transcript_lines", &self.transcript.len())
            .field("accepting", &self.accepting)
            .field("busy", &self.busy)
            .finish()
    }
}

impl ShellSession {
    pub fn new(content: Arc<ContentData>, shell: ShellConfig, time: SharedTimeSource) -> Self {
        let started_at = time.now();
        let registry = CommandRegistry::new();
        let editor = LineEditor::new(registry.names().collect::<Vec<_>>());
        Self {
            editor,
            transcript: Transcript::new(),
            registry,
            content,
            shell,
            time,
            started_at,
            accepting: false,
            busy: false,
        }
    }

    /// Measure uptime from `started_at` instead of construction time.
    pub fn with_started_at(mut self, started_at: Instant) -> Self {
        self.started_at = started_at;
        self
    }

    pub fn editor(&self) -> &LineEditor {
        &self.editor
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn transcript_mut(&mut self) -> &mut Transcript {
        &mut self.transcript
    }

    pub fn content(&self) -> &ContentData {
        &self.content
    }

    pub fn shell_config(&self) -> &ShellConfig {
        &self.shell
    }

    pub fn uptime(&self) -> Duration {
        self.time.elapsed_since(self.started_at)
    }

    pub fn is_accepting(&self) -> bool {
        self.accepting
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// The live prompt is shown only when input would be accepted.
    pub fn prompt_visible(&self) -> bool {
        self.accepting && !self.busy
    }

    /// Block input, e.g. while a boot run owns the screen.
    pub fn lock(&mut self) {
        self.accepting = false;
    }

    pub fn unlock(&mut self) {
        self.accepting = true;
    }

    /// Feed one key to the line editor; a submitted line is executed.
    ///
    /// Keys are dropped while the session is locked.
    pub fn handle_key(&mut self, key: EditKey, host: &mut dyn ShellHost) -> EditOutcome {
        if !self.accepting || self.busy {
            return EditOutcome::Unchanged;
        }
        let outcome = self.editor.handle(key);
        if let EditOutcome::Submitted(line) = &outcome {
            self.execute(line, host);
        }
        self.transcript.scroll_to_end();
        outcome
    }

    /// Echo, dispatch and display one command line.
    pub fn execute(&mut self, line: &str, host: &mut dyn ShellHost) -> CommandResult {
        self.transcript.push(prompt_line(&self.shell, line.trim()));

        let result = match CommandInvocation::parse(line) {
            Some(invocation) => {
                let ctx = CommandContext::new(&self.content, self.uptime(), &self.shell);
                self.registry.dispatch(&invocation, &ctx)
            }
            None => CommandResult::no_output(),
        };

        for effect in &result.effects {
            host.fire(*effect);
        }

        if let Some(pause) = result.pause {
            self.busy = true;
            host.refresh(self);
            self.wait(pause, host);
            self.busy = false;
        }

        match &result.output {
            CommandOutput::ClearScreen => self.transcript.clear(),
            CommandOutput::DisplayText(markup) => {
                self.transcript.extend(markup.clone());
                self.transcript.push_blank();
            }
            CommandOutput::NoOutput => self.transcript.push_blank(),
        }
        self.transcript.scroll_to_end();
        host.refresh(self);
        result
    }

    /// Clear the transcript and type the greeting, then accept input.
    pub fn play_intro(&mut self, host: &mut dyn ShellHost) {
        self.lock();
        self.transcript.clear();
        host.refresh(self);

        let greeting = format!("hi, i'm {}", self.content.profile.name.to_lowercase());
        let tagline = self
            .content
            .profile
            .tagline
            .clone()
            .unwrap_or_else(|| self.content.stack_line());
        self.type_line(&greeting, Tag::Name, host);
        self.type_line(&tagline, Tag::Role, host);

        self.transcript.push(intro_hint());
        self.transcript.push_blank();
        self.unlock();
        host.refresh(self);
        tracing::debug!("Terminal intro finished");
    }

    fn type_line(&mut self, text: &str, tag: Tag, host: &mut dyn ShellHost) {
        let delay = Duration::from_millis(self.shell.typing_delay_ms);
        let time = Arc::clone(&self.time);
        self.transcript.push(Line::from(Span::new(String::new(), tag)));
        typewrite(text, delay, time.as_ref(), |c| {
            if let Some(span) = self
                .transcript
                .last_mut()
                .and_then(|line| line.spans.last_mut())
            {
                span.text.push(c);
            }
            host.refresh(self);
        });
        self.time
            .sleep(Duration::from_millis(self.shell.intro_line_pause_ms));
    }

    /// Sleep for `total`, refreshing the host between slices.
    fn wait(&self, total: Duration, host: &mut dyn ShellHost) {
        let mut remaining = total;
        while !remaining.is_zero() {
            let step = remaining.min(FRAME);
            self.time.sleep(step);
            remaining -= step;
            host.refresh(self);
        }
    }
}
