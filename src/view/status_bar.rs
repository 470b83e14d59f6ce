//! Status bar rendering

use crate::model::mode::{Mode, ToggleLabel};
use crate::view::theme::Theme;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

/// Everything the status bar shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    pub host_name: String,
    pub uptime: Duration,
    /// Wall clock, already formatted
    pub clock: String,
    pub mode: Mode,
    pub toggle: ToggleLabel,
    /// Mode recorded as the entry parameter
    pub entry_param: Mode,
}

/// Uptime as `H:MM`.
pub fn format_uptime(uptime: Duration) -> String {
    let mins = uptime.as_secs() / 60;
    format!("{}:{:02}", mins / 60, mins % 60)
}

/// Renders the status bar
pub struct StatusBarRenderer;

impl StatusBarRenderer {
    /// The left and right halves of the bar as plain strings.
    pub fn sections(info: &StatusInfo) -> (String, String) {
        let left = format!(
            " {} │ up {} │ {} ",
            info.host_name,
            format_uptime(info.uptime),
            info.mode
        );
        let right = format!(
            " ^T {} │ --mode {} │ {} ",
            info.toggle, info.entry_param, info.clock
        );
        (left, right)
    }

    pub fn render_status_bar(frame: &mut Frame, area: Rect, info: &StatusInfo, theme: &Theme) {
        let base = theme.status_bar();
        let (left, right) = Self::sections(info);

        let width = area.width as usize;
        let used = left.width() + right.width();
        let mut spans = vec![Span::styled(left, base.add_modifier(Modifier::BOLD))];
        if used <= width {
            spans.push(Span::styled(" ".repeat(width - used), base));
            spans.push(Span::styled(right, base));
        }
        // Too narrow for both halves: the left half wins

        frame.render_widget(Paragraph::new(Line::from(spans)).style(base), area);
    }
}
