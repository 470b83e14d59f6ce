//! The visible log of the interactive shell.

use crate::model::markup::{Line, Markup};
use std::ops::Range;

/// Ordered transcript lines plus a bottom-anchored scroll position.
///
/// `scroll_back` counts screen rows scrolled up from the end; zero means the
/// view follows new output. Rows are the wrapped lines, so the view supplies
/// the row count when windowing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<Line>,
    scroll_back: usize,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    pub fn push_blank(&mut self) {
        self.lines.push(Line::blank());
    }

    pub fn extend(&mut self, markup: Markup) {
        self.lines.extend(markup.lines);
    }

    /// Mutable access to the last line, for typewriter output.
    pub fn last_mut(&mut self) -> Option<&mut Line> {
        self.lines.last_mut()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.scroll_back = 0;
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Plain text of the whole transcript.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(Line::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn scroll_to_end(&mut self) {
        self.scroll_back = 0;
    }

    /// Scroll up by `rows`, never past `max` rows from the end.
    pub fn scroll_up(&mut self, rows: usize, max: usize) {
        self.scroll_back = self.scroll_back.saturating_add(rows).min(max);
    }

    pub fn scroll_down(&mut self, rows: usize) {
        self.scroll_back = self.scroll_back.saturating_sub(rows);
    }

    pub fn scroll_back(&self) -> usize {
        self.scroll_back
    }

    pub fn is_at_end(&self) -> bool {
        self.scroll_back == 0
    }

    /// Rows visible out of `total_rows` wrapped rows when `room` rows are
    /// available.
    pub fn visible_rows(&self, total_rows: usize, room: usize) -> Range<usize> {
        let back = self.scroll_back.min(total_rows.saturating_sub(room));
        let end = total_rows - back;
        end.saturating_sub(room)..end
    }
}
