//! The ratatui terminal as the app's presentation.
//!
//! [`Screen`] owns what is on screen apart from the shell session: the boot
//! log, which view is revealed, the static hero and document, status bar
//! state and running effects. It implements every surface trait the app
//! core talks to, and redraws after each change so timed sequences animate.

use crate::app::boot_sequencer::BootSurface;
use crate::app::intro::{HeroField, HeroSurface};
use crate::app::mode_controller::Presentation;
use crate::app::session::{ShellHost, ShellSession};
use crate::app::static_document::StaticDocument;
use crate::input::key_translator::ScrollKey;
use crate::model::markup::Line;
use crate::model::mode::{Mode, ToggleLabel};
use crate::services::effects::SideEffect;
use crate::services::time_source::SharedTimeSource;
use crate::view::effects::EffectOverlay;
use crate::view::render;
use crate::view::status_bar::{StatusBarRenderer, StatusInfo};
use crate::view::theme::Theme;
use ratatui::backend::Backend;
use ratatui::layout::Rect;
use ratatui::widgets::Block;
use ratatui::Terminal;
use std::time::Instant;

pub struct Screen<B: Backend> {
    terminal: Terminal<B>,
    theme: Theme,
    time: SharedTimeSource,
    started_at: Instant,
    host_name: String,

    boot_lines: Vec<Line>,
    boot_visible: bool,
    revealed: Option<Mode>,
    toggle: ToggleLabel,
    entry_param: Mode,

    hero_name: String,
    hero_stack: String,
    document: StaticDocument,
    doc_scroll: u16,

    overlay: EffectOverlay,
}

impl<B: Backend> Screen<B> {
    pub fn new(
        terminal: Terminal<B>,
        theme: Theme,
        time: SharedTimeSource,
        host_name: impl Into<String>,
        document: StaticDocument,
    ) -> Self {
        let started_at = time.now();
        Self {
            terminal,
            theme,
            time,
            started_at,
            host_name: host_name.into(),
            boot_lines: Vec::new(),
            boot_visible: false,
            revealed: None,
            toggle: Mode::Interactive.toggle_label(),
            entry_param: Mode::Interactive,
            hero_name: String::new(),
            hero_stack: String::new(),
            document,
            doc_scroll: 0,
            overlay: EffectOverlay::default(),
        }
    }

    /// Measure status-bar uptime from `started_at`.
    pub fn with_started_at(mut self, started_at: Instant) -> Self {
        self.started_at = started_at;
        self
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn revealed(&self) -> Option<Mode> {
        self.revealed
    }

    pub fn is_boot_visible(&self) -> bool {
        self.boot_visible
    }

    pub fn boot_lines(&self) -> &[Line] {
        &self.boot_lines
    }

    pub fn hero(&self) -> (&str, &str) {
        (&self.hero_name, &self.hero_stack)
    }

    pub fn toggle_label(&self) -> ToggleLabel {
        self.toggle
    }

    pub fn entry_param(&self) -> Mode {
        self.entry_param
    }

    pub fn doc_scroll(&self) -> u16 {
        self.doc_scroll
    }

    pub fn overlay(&self) -> &EffectOverlay {
        &self.overlay
    }

    /// Current terminal size as (columns, rows).
    pub fn size(&self) -> (u16, u16) {
        match self.terminal.size() {
            Ok(size) => (size.width, size.height),
            Err(e) => {
                tracing::warn!("Failed to query terminal size: {}", e);
                (0, 0)
            }
        }
    }

    pub fn status_info(&self) -> StatusInfo {
        let mode = self.revealed.unwrap_or(self.entry_param);
        StatusInfo {
            host_name: self.host_name.clone(),
            uptime: self.time.elapsed_since(self.started_at),
            clock: chrono::Local::now().format("%H:%M:%S").to_string(),
            mode,
            toggle: self.toggle,
            entry_param: self.entry_param,
        }
    }

    /// Scroll the static document.
    pub fn scroll_static(&mut self, key: ScrollKey) {
        let (cols, rows) = self.size();
        let (main, _) = render::split(Rect::new(0, 0, cols, rows));
        let page = render::static_body_height(main).max(1);
        let rows = render::static_body_rows(&self.document, main);
        let max = u16::try_from(rows).unwrap_or(u16::MAX).saturating_sub(page);
        self.doc_scroll = match key {
            ScrollKey::LineUp => self.doc_scroll.saturating_sub(1),
            ScrollKey::LineDown => self.doc_scroll.saturating_add(1),
            ScrollKey::PageUp => self.doc_scroll.saturating_sub(page),
            ScrollKey::PageDown => self.doc_scroll.saturating_add(page),
            ScrollKey::Top => 0,
            ScrollKey::Bottom => max,
        }
        .min(max);
    }

    /// Draw a frame. `shell` is drawn when the terminal view is revealed.
    pub fn draw(&mut self, shell: Option<&ShellSession>) {
        let now = self.time.now();
        let info = self.status_info();
        let Self {
            terminal,
            theme,
            boot_lines,
            boot_visible,
            revealed,
            hero_name,
            hero_stack,
            document,
            doc_scroll,
            overlay,
            ..
        } = self;

        let result = terminal.draw(|frame| {
            let (main, status) = render::split(frame.area());
            frame.render_widget(Block::new().style(theme.base()), main);
            if *boot_visible {
                render::draw_boot(frame, main, boot_lines, theme);
            } else {
                match (*revealed, shell) {
                    (Some(Mode::Interactive), Some(session)) => {
                        render::draw_terminal(frame, main, session, theme)
                    }
                    (Some(Mode::Static), _) => render::draw_static(
                        frame,
                        main,
                        (hero_name.as_str(), hero_stack.as_str()),
                        document,
                        *doc_scroll,
                        theme,
                    ),
                    _ => {}
                }
            }
            StatusBarRenderer::render_status_bar(frame, status, &info, theme);
            overlay.paint(frame.buffer_mut(), main, now);
        });
        if let Err(e) = result {
            tracing::warn!("Failed to draw frame: {}", e);
        }
    }
}

impl<B: Backend> BootSurface for Screen<B> {
    fn show(&mut self) {
        self.boot_lines.clear();
        self.boot_visible = true;
        self.draw(None);
    }

    fn append(&mut self, line: Line) {
        self.boot_lines.push(line);
        self.draw(None);
    }

    fn clear_and_hide(&mut self) {
        self.boot_lines.clear();
        self.boot_visible = false;
        self.draw(None);
    }
}

impl<B: Backend> Presentation for Screen<B> {
    fn hide_views(&mut self) {
        self.revealed = None;
    }

    fn reveal(&mut self, mode: Mode) {
        if mode == Mode::Static {
            self.doc_scroll = 0;
        }
        self.revealed = Some(mode);
    }

    fn set_toggle_label(&mut self, label: ToggleLabel) {
        self.toggle = label;
    }

    fn set_entry_param(&mut self, mode: Mode) {
        self.entry_param = mode;
    }

    fn boot_surface(&mut self) -> Option<&mut dyn BootSurface> {
        Some(self)
    }
}

impl<B: Backend> ShellHost for Screen<B> {
    fn fire(&mut self, effect: SideEffect) {
        self.overlay.start(effect, self.time.now());
    }

    fn refresh(&mut self, session: &ShellSession) {
        self.draw(Some(session));
    }
}

impl<B: Backend> HeroSurface for Screen<B> {
    fn clear_hero(&mut self) {
        self.hero_name.clear();
        self.hero_stack.clear();
        self.draw(None);
    }

    fn type_hero(&mut self, field: HeroField, c: char) {
        match field {
            HeroField::Name => self.hero_name.push(c),
            HeroField::Stack => self.hero_stack.push(c),
        }
        self.draw(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentData;
    use crate::model::markup::Tag;
    use crate::services::time_source::TestTimeSource;
    use ratatui::backend::TestBackend;

    fn screen(width: u16, height: u16) -> Screen<TestBackend> {
        let terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let content = ContentData::from_json(
            r#"{"profile": {"name": "N", "role": "R", "intro": "I"},
                "projects": [
                  {"name": "a", "description": "d"}, {"name": "b", "description": "d"},
                  {"name": "c", "description": "d"}, {"name": "e", "description": "d"}
                ]}"#,
        )
        .unwrap();
        Screen::new(
            terminal,
            Theme::dark(),
            TestTimeSource::shared(),
            "portfolio",
            StaticDocument::build(&content),
        )
    }

    #[test]
    fn test_boot_surface_lifecycle() {
        let mut s = screen(40, 10);
        s.show();
        s.append(Line::tagged("[  OK  ] Started", Tag::BootOk));
        assert!(s.is_boot_visible());
        assert_eq!(s.boot_lines().len(), 1);
        s.clear_and_hide();
        assert!(!s.is_boot_visible());
        assert!(s.boot_lines().is_empty());
    }

    #[test]
    fn test_static_scroll_is_clamped() {
        // 12 rows: 11 main, 6 body rows; body is 1 + 1 + 4 * 3 = 14 lines
        let mut s = screen(40, 12);
        s.reveal(Mode::Static);
        s.scroll_static(ScrollKey::Bottom);
        let max = s.doc_scroll();
        assert!(max > 0);
        s.scroll_static(ScrollKey::PageDown);
        assert_eq!(s.doc_scroll(), max);
        s.scroll_static(ScrollKey::Top);
        assert_eq!(s.doc_scroll(), 0);
        s.scroll_static(ScrollKey::LineUp);
        assert_eq!(s.doc_scroll(), 0);
    }

    #[test]
    fn test_static_scroll_reaches_wrapped_rows() {
        let content = ContentData::from_json(
            r#"{"profile": {"name": "N", "role": "R", "intro": "I"},
                "projects": [{"name": "a", "description": "one two three four five six seven eight nine ten"}]}"#,
        )
        .unwrap();
        let terminal = Terminal::new(TestBackend::new(16, 10)).unwrap();
        let mut s = Screen::new(
            terminal,
            Theme::dark(),
            TestTimeSource::shared(),
            "portfolio",
            StaticDocument::build(&content),
        );
        // 9 main rows leave 4 body rows; 4 lines wrap to 7 rows at width 14
        s.reveal(Mode::Static);
        s.scroll_static(ScrollKey::Bottom);
        assert_eq!(s.doc_scroll(), 3);
    }

    #[test]
    fn test_presentation_updates_status() {
        let mut s = screen(100, 10);
        s.set_entry_param(Mode::Static);
        s.set_toggle_label(Mode::Static.toggle_label());
        s.reveal(Mode::Static);
        let info = s.status_info();
        assert_eq!(info.mode, Mode::Static);
        assert_eq!(info.toggle.text, "Terminal");
        assert_eq!(info.entry_param, Mode::Static);
    }

    #[test]
    fn test_fired_effects_are_tracked() {
        let mut s = screen(40, 10);
        ShellHost::fire(&mut s, SideEffect::Confetti);
        assert!(s.overlay().is_active(SideEffect::Confetti));
    }
}
