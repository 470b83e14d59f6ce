//! The shell's single-line input buffer.
//!
//! [`LineEditor`] is a small state machine driven by [`EditKey`]s. It owns
//! the buffer and the [`HistoryLog`]; submitting a line hands the trimmed
//! text back to the caller, which does the dispatching.

use super::input_history::HistoryLog;

/// A key as far as the line editor is concerned.
///
/// Chords with Ctrl/Alt/Meta never reach the editor as `Char`; the key
/// translator turns them into `Ignored` (or into app-level actions).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    Char(char),
    Backspace,
    Enter,
    Up,
    Down,
    Tab,
    Ignored,
}

/// What a key did to the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Enter on a non-blank line: the trimmed line, already in history
    Submitted(String),
    /// The buffer changed
    Edited,
    /// Nothing changed
    Unchanged,
}

#[derive(Debug, Clone, Default)]
pub struct LineEditor {
    buffer: String,
    history: HistoryLog,
    /// Completion candidates, in priority order
    completions: Vec<&'static str>,
}

impl LineEditor {
    pub fn new(completions: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            buffer: String::new(),
            history: HistoryLog::new(),
            completions: completions.into_iter().collect(),
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// True in the Idle state: empty buffer, history cursor past the end.
    pub fn is_idle(&self) -> bool {
        self.buffer.is_empty() && self.history.is_past_end()
    }

    pub fn handle(&mut self, key: EditKey) -> EditOutcome {
        match key {
            EditKey::Char(c) => {
                if c.is_control() {
                    return EditOutcome::Unchanged;
                }
                self.buffer.push(c);
                EditOutcome::Edited
            }
            EditKey::Backspace => match self.buffer.pop() {
                Some(_) => EditOutcome::Edited,
                None => EditOutcome::Unchanged,
            },
            EditKey::Enter => self.submit(),
            EditKey::Up => match self.history.older() {
                Some(entry) => {
                    self.buffer = entry.to_string();
                    EditOutcome::Edited
                }
                None => EditOutcome::Unchanged,
            },
            EditKey::Down => {
                let replacement = self.history.newer().unwrap_or_default().to_string();
                if replacement == self.buffer {
                    return EditOutcome::Unchanged;
                }
                self.buffer = replacement;
                EditOutcome::Edited
            }
            EditKey::Tab => self.complete(),
            EditKey::Ignored => EditOutcome::Unchanged,
        }
    }

    fn submit(&mut self) -> EditOutcome {
        let line = self.buffer.trim().to_string();
        if line.is_empty() {
            // Whitespace-only lines are dropped without a trace
            if self.buffer.is_empty() {
                return EditOutcome::Unchanged;
            }
            self.buffer.clear();
            return EditOutcome::Edited;
        }
        self.history.record(line.clone());
        self.buffer.clear();
        tracing::debug!("Submitted command line ({} in history)", self.history.len());
        EditOutcome::Submitted(line)
    }

    fn complete(&mut self) -> EditOutcome {
        let prefix = self.buffer.as_str();
        let Some(name) = self
            .completions
            .iter()
            .find(|name| name.starts_with(prefix) && **name != prefix)
        else {
            return EditOutcome::Unchanged;
        };
        self.buffer = format!("{} ", name);
        EditOutcome::Edited
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::command_registry::CommandRegistry;
    use proptest::prelude::*;

    fn editor() -> LineEditor {
        LineEditor::new(CommandRegistry::new().names().collect::<Vec<_>>())
    }

    fn type_str(editor: &mut LineEditor, text: &str) {
        for c in text.chars() {
            editor.handle(EditKey::Char(c));
        }
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut ed = editor();
        assert!(ed.is_idle());
        type_str(&mut ed, "lsx");
        assert_eq!(ed.handle(EditKey::Backspace), EditOutcome::Edited);
        assert_eq!(ed.buffer(), "ls");
        ed.handle(EditKey::Backspace);
        ed.handle(EditKey::Backspace);
        assert_eq!(ed.handle(EditKey::Backspace), EditOutcome::Unchanged);
        assert!(ed.is_idle());
    }

    #[test]
    fn test_enter_submits_trimmed_line() {
        let mut ed = editor();
        type_str(&mut ed, "  cat README.md  ");
        assert_eq!(
            ed.handle(EditKey::Enter),
            EditOutcome::Submitted("cat README.md".to_string())
        );
        assert_eq!(ed.buffer(), "");
        assert_eq!(ed.history().entries(), ["cat README.md"]);
    }

    #[test]
    fn test_blank_enter_records_nothing() {
        let mut ed = editor();
        assert_eq!(ed.handle(EditKey::Enter), EditOutcome::Unchanged);
        type_str(&mut ed, "   ");
        assert_eq!(ed.handle(EditKey::Enter), EditOutcome::Edited);
        assert!(ed.history().is_empty());
        assert_eq!(ed.buffer(), "");
    }

    #[test]
    fn test_history_scenario() {
        let mut ed = editor();
        type_str(&mut ed, "whoami");
        ed.handle(EditKey::Enter);
        type_str(&mut ed, "help");
        ed.handle(EditKey::Enter);

        ed.handle(EditKey::Up);
        ed.handle(EditKey::Up);
        assert_eq!(ed.buffer(), "whoami");
        ed.handle(EditKey::Down);
        assert_eq!(ed.buffer(), "help");
        ed.handle(EditKey::Down);
        assert_eq!(ed.buffer(), "");
        assert!(ed.is_idle());
    }

    #[test]
    fn test_up_at_oldest_keeps_buffer() {
        let mut ed = editor();
        type_str(&mut ed, "ls");
        ed.handle(EditKey::Enter);
        ed.handle(EditKey::Up);
        assert_eq!(ed.handle(EditKey::Up), EditOutcome::Unchanged);
        assert_eq!(ed.buffer(), "ls");
    }

    #[test]
    fn test_tab_completion() {
        let mut ed = editor();
        type_str(&mut ed, "he");
        assert_eq!(ed.handle(EditKey::Tab), EditOutcome::Edited);
        assert_eq!(ed.buffer(), "help ");

        let mut ed = editor();
        type_str(&mut ed, "help");
        assert_eq!(ed.handle(EditKey::Tab), EditOutcome::Unchanged);
        assert_eq!(ed.buffer(), "help");

        let mut ed = editor();
        type_str(&mut ed, "zz");
        assert_eq!(ed.handle(EditKey::Tab), EditOutcome::Unchanged);
        assert_eq!(ed.buffer(), "zz");
    }

    #[test]
    fn test_ignored_and_control_keys() {
        let mut ed = editor();
        assert_eq!(ed.handle(EditKey::Ignored), EditOutcome::Unchanged);
        assert_eq!(ed.handle(EditKey::Char('\u{7}')), EditOutcome::Unchanged);
        assert!(ed.is_idle());
    }

    proptest! {
        #[test]
        fn prop_history_only_holds_non_blank_trimmed_lines(
            lines in proptest::collection::vec("[ a-z]{0,8}", 0..12)
        ) {
            let mut ed = editor();
            for line in &lines {
                type_str(&mut ed, line);
                ed.handle(EditKey::Enter);
            }
            let expected: Vec<String> = lines
                .iter()
                .map(|l| l.trim().to_string())
                .filter(|l| !l.is_empty())
                .collect();
            prop_assert_eq!(ed.history().entries(), expected.as_slice());
            prop_assert!(ed.is_idle());
        }
    }
}
