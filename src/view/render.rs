//! Frame rendering for the three main surfaces.
//!
//! Markup is wrapped to the area width first; windowing and scrolling then
//! work on the wrapped rows.

use crate::app::session::{prompt_line, ShellSession};
use crate::app::static_document::StaticDocument;
use crate::model::markup::{Line as MarkupLine, Tag};
use crate::view::theme::Theme;
use crate::view::wrap::{line_width, wrap_line, wrap_lines};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

/// Convert one markup line into a styled ratatui line.
pub fn styled_line<'a>(line: &'a MarkupLine, theme: &Theme) -> Line<'a> {
    Line::from(
        line.spans
            .iter()
            .map(|span| Span::styled(span.text.as_str(), theme.style(span.tag)))
            .collect::<Vec<_>>(),
    )
}

/// Split the frame into the main area and the one-row status bar.
pub fn split(area: Rect) -> (Rect, Rect) {
    let [main, status] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
    (main, status)
}

/// Boot (and shutdown) log, pinned to its last rows.
pub fn draw_boot(frame: &mut Frame, area: Rect, lines: &[MarkupLine], theme: &Theme) {
    let rows = wrap_lines(lines, area.width as usize);
    let skip = rows.len().saturating_sub(area.height as usize);
    let text = Text::from(
        rows[skip..]
            .iter()
            .map(|l| styled_line(l, theme))
            .collect::<Vec<_>>(),
    );
    frame.render_widget(Paragraph::new(text).style(theme.base()), area);
}

/// Wrapped transcript rows and prompt rows.
fn terminal_rows(session: &ShellSession, width: usize) -> (Vec<MarkupLine>, Vec<MarkupLine>) {
    let transcript = wrap_lines(session.transcript().lines(), width);
    if !session.prompt_visible() {
        return (transcript, Vec::new());
    }
    let line = prompt_line(session.shell_config(), session.editor().buffer());
    let mut prompt = wrap_line(&line, width);
    // Keep a cell free for the cursor
    if width > 0 && prompt.last().is_some_and(|row| line_width(row) >= width) {
        prompt.push(MarkupLine::new());
    }
    (transcript, prompt)
}

/// How many rows the transcript can scroll back in a terminal view of `area`.
pub fn transcript_scroll_limit(session: &ShellSession, area: Rect) -> usize {
    let (transcript, prompt) = terminal_rows(session, area.width as usize);
    let room = (area.height as usize).saturating_sub(prompt.len());
    transcript.len().saturating_sub(room)
}

/// Transcript plus the live prompt.
pub fn draw_terminal(frame: &mut Frame, area: Rect, session: &ShellSession, theme: &Theme) {
    let height = area.height as usize;
    let (transcript, prompt) = terminal_rows(session, area.width as usize);
    let prompt = &prompt[prompt.len().saturating_sub(height)..];
    let visible = session
        .transcript()
        .visible_rows(transcript.len(), height - prompt.len());

    let mut lines: Vec<Line> = transcript[visible]
        .iter()
        .chain(prompt)
        .map(|l| styled_line(l, theme))
        .collect();

    if !prompt.is_empty() {
        if let Some(row) = lines.last_mut() {
            row.spans.push(Span::styled(
                " ",
                theme.base().add_modifier(Modifier::REVERSED),
            ));
        }
    }

    frame.render_widget(Paragraph::new(Text::from(lines)).style(theme.base()), area);
}

/// Hero and body areas of a static view drawn in `area`.
pub fn static_layout(area: Rect) -> (Rect, Rect) {
    let inner = Block::bordered().inner(area);
    let [hero, body] = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(inner);
    (hero, body)
}

/// Hero typed so far plus the scrollable document body.
pub fn draw_static(
    frame: &mut Frame,
    area: Rect,
    hero: (&str, &str),
    document: &StaticDocument,
    scroll: u16,
    theme: &Theme,
) {
    let block = Block::bordered()
        .title(" portfolio ")
        .border_style(theme.style(Tag::Muted))
        .style(theme.base());
    frame.render_widget(block, area);
    let (hero_area, body_area) = static_layout(area);

    let hero_rows = wrap_lines(
        &[
            MarkupLine::tagged(hero.0, Tag::Name),
            MarkupLine::tagged(hero.1, Tag::Role),
        ],
        hero_area.width as usize,
    );
    let hero_text = Text::from(
        hero_rows
            .iter()
            .map(|l| styled_line(l, theme))
            .collect::<Vec<_>>(),
    );
    frame.render_widget(Paragraph::new(hero_text).style(theme.base()), hero_area);

    let body_rows = wrap_lines(&document.body.lines, body_area.width as usize);
    let body = Text::from(
        body_rows
            .iter()
            .map(|l| styled_line(l, theme))
            .collect::<Vec<_>>(),
    );
    frame.render_widget(
        Paragraph::new(body).style(theme.base()).scroll((scroll, 0)),
        body_area,
    );
}

/// Rows of document body visible in a static view of `area`.
pub fn static_body_height(area: Rect) -> u16 {
    static_layout(area).1.height
}

/// Wrapped rows of the document body in a static view of `area`.
pub fn static_body_rows(document: &StaticDocument, area: Rect) -> usize {
    let (_, body) = static_layout(area);
    wrap_lines(&document.body.lines, body.width as usize).len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShellConfig;
    use crate::content::ContentData;
    use crate::input::line_editor::EditKey;
    use crate::services::time_source::TestTimeSource;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;
    use std::sync::Arc;

    fn rows(buffer: &Buffer) -> Vec<String> {
        let area = buffer.area;
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    struct NoHost;

    impl crate::app::session::ShellHost for NoHost {
        fn fire(&mut self, _effect: crate::services::effects::SideEffect) {}
        fn refresh(&mut self, _session: &ShellSession) {}
    }

    #[test]
    fn test_terminal_view_shows_prompt_with_buffer() {
        let mut session = ShellSession::new(
            Arc::new(ContentData::fallback()),
            ShellConfig::default(),
            TestTimeSource::shared(),
        );
        session.unlock();
        session.execute("ls etc", &mut NoHost);
        session.handle_key(EditKey::Char('h'), &mut NoHost);

        let mut terminal = Terminal::new(TestBackend::new(60, 6)).unwrap();
        terminal
            .draw(|f| draw_terminal(f, f.area(), &session, &Theme::dark()))
            .unwrap();

        let rows = rows(terminal.backend().buffer());
        assert!(rows[0].contains("~/portfolio"));
        assert!(rows[0].contains("ls etc"));
        assert!(rows[1].contains("No such directory"));
        assert!(rows[3].contains("main"));
        assert!(rows[3].trim_end().ends_with('h'));
    }

    #[test]
    fn test_boot_view_keeps_latest_lines() {
        let lines: Vec<MarkupLine> = (0..10).map(|i| MarkupLine::plain(format!("line {i}"))).collect();
        let mut terminal = Terminal::new(TestBackend::new(20, 3)).unwrap();
        terminal
            .draw(|f| draw_boot(f, f.area(), &lines, &Theme::dark()))
            .unwrap();
        let rows = rows(terminal.backend().buffer());
        assert_eq!(rows[0].trim_end(), "line 7");
        assert_eq!(rows[2].trim_end(), "line 9");
    }

    #[test]
    fn test_static_view_draws_hero() {
        let document = StaticDocument::build(&ContentData::fallback());
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal
            .draw(|f| {
                draw_static(
                    f,
                    f.area(),
                    ("abhijit", "software"),
                    &document,
                    0,
                    &Theme::dark(),
                )
            })
            .unwrap();
        let rows = rows(terminal.backend().buffer());
        assert!(rows[0].contains("portfolio"));
        assert!(rows[1].contains("abhijit"));
        assert!(rows[2].contains("software"));
    }

    #[test]
    fn test_static_view_wraps_long_descriptions() {
        let content = ContentData::from_json(
            r#"{"profile": {"name": "Ada", "role": "Engineer", "intro": "i"},
                "projects": [{"name": "engine",
                  "description": "Analytical engine that computes Bernoulli numbers ENDMARK"}]}"#,
        )
        .unwrap();
        let document = StaticDocument::build(&content);
        let area = Rect::new(0, 0, 40, 20);
        assert!(static_body_rows(&document, area) > document.body.len());

        let mut terminal = Terminal::new(TestBackend::new(40, 20)).unwrap();
        terminal
            .draw(|f| draw_static(f, f.area(), ("ada", "engineer"), &document, 0, &Theme::dark()))
            .unwrap();
        let all = rows(terminal.backend().buffer()).join("\n");
        assert!(all.contains("Analytical engine"));
        assert!(all.contains("ENDMARK"));
    }

    #[test]
    fn test_terminal_view_wraps_long_output() {
        let mut session = ShellSession::new(
            Arc::new(ContentData::fallback()),
            ShellConfig::default(),
            TestTimeSource::shared(),
        );
        session.unlock();
        session
            .transcript_mut()
            .push(MarkupLine::plain(format!("{}TAIL", "word ".repeat(12))));

        let mut terminal = Terminal::new(TestBackend::new(30, 6)).unwrap();
        terminal
            .draw(|f| draw_terminal(f, f.area(), &session, &Theme::dark()))
            .unwrap();

        let rows = rows(terminal.backend().buffer());
        assert!(rows[0].starts_with("word word"));
        assert!(rows[2].contains("TAIL"));
        assert!(rows[3].contains("~/portfolio"));
    }

    #[test]
    fn test_long_prompt_buffer_wraps() {
        let mut session = ShellSession::new(
            Arc::new(ContentData::fallback()),
            ShellConfig::default(),
            TestTimeSource::shared(),
        );
        session.unlock();
        for c in "cat averyveryverylongfilename.md".chars() {
            session.handle_key(EditKey::Char(c), &mut NoHost);
        }

        let mut terminal = Terminal::new(TestBackend::new(30, 4)).unwrap();
        terminal
            .draw(|f| draw_terminal(f, f.area(), &session, &Theme::dark()))
            .unwrap();

        let all = rows(terminal.backend().buffer()).join("");
        assert!(all.contains("filename.md"));
    }
}
