//! The application: wires the app core to a ratatui terminal and runs the
//! event loop.

use super::boot_sequencer::BootSequencer;
use super::intro::play_static_intro;
use super::mode_controller::{ModeController, Presentation};
use super::session::ShellSession;
use super::shutdown::play_shutdown;
use super::static_document::StaticDocument;
use crate::config::Config;
use crate::content::ContentData;
use crate::input::key_translator::{translate, AppKey, ScrollKey};
use crate::model::mode::Mode;
use crate::services::effects::EffectSink;
use crate::services::mode_store::ModeStore;
use crate::services::time_source::SharedTimeSource;
use crate::services::variant_picker::VariantPicker;
use crate::view::render;
use crate::view::screen::Screen;
use crate::view::theme::Theme;
use crossterm::event::{self, Event, KeyEvent};
use ratatui::backend::Backend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::Duration;

/// How long the loop waits for input before redrawing (clock, effects).
const TICK: Duration = Duration::from_millis(100);

/// Injected collaborators.
pub struct AppServices {
    pub time: SharedTimeSource,
    pub picker: Box<dyn VariantPicker>,
    /// Plays the boot sound
    pub audio: Box<dyn EffectSink>,
    pub store: Box<dyn ModeStore>,
}

/// What handling one event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// Nothing blocking happened
    Done,
    /// A boot run or intro played; queued input should be discarded
    Sequenced,
    /// The shutdown sequence played; the app should exit
    Exit,
}

pub struct App<B: Backend> {
    screen: Screen<B>,
    session: ShellSession,
    controller: ModeController,
    boot: BootSequencer,
    store: Box<dyn ModeStore>,
    content: Arc<ContentData>,
    time: SharedTimeSource,
    running: bool,
}

impl<B: Backend> App<B> {
    /// Build the app and resolve the startup mode from `entry_mode`, the
    /// persisted mode and the terminal size.
    pub fn new(
        terminal: Terminal<B>,
        config: &Config,
        content: Arc<ContentData>,
        entry_mode: Option<Mode>,
        services: AppServices,
    ) -> Self {
        let AppServices {
            time,
            picker,
            audio,
            store,
        } = services;
        let started_at = time.now();

        let screen = Screen::new(
            terminal,
            Theme::from_name(&config.theme),
            Arc::clone(&time),
            config.shell.host_name.clone(),
            StaticDocument::build(&content),
        )
        .with_started_at(started_at);
        let session = ShellSession::new(Arc::clone(&content), config.shell.clone(), Arc::clone(&time))
            .with_started_at(started_at);
        let boot = BootSequencer::new(picker, Arc::clone(&time), audio)
            .with_trailing_delay(Duration::from_millis(config.boot.trailing_delay_ms))
            .with_sound(config.boot.sound);
        let controller =
            ModeController::resolve(entry_mode, store.as_ref(), screen.size(), &config.display);

        Self {
            screen,
            session,
            controller,
            boot,
            store,
            content,
            time,
            running: true,
        }
    }

    pub fn mode(&self) -> Mode {
        self.controller.current()
    }

    pub fn screen(&self) -> &Screen<B> {
        &self.screen
    }

    pub fn session(&self) -> &ShellSession {
        &self.session
    }

    pub fn boot_runs(&self) -> usize {
        self.boot.runs()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Initial boot run, then reveal the startup mode and play its intro.
    pub fn start(&mut self) {
        self.screen.hide_views();
        self.boot.run(self.screen.boot_surface());
        self.controller.apply(&mut self.screen);
        self.play_intro();
    }

    fn play_intro(&mut self) {
        match self.controller.current() {
            Mode::Interactive => self.session.play_intro(&mut self.screen),
            Mode::Static => {
                self.session.lock();
                play_static_intro(&mut self.screen, &self.content, self.time.as_ref());
            }
        }
    }

    /// Draw the current state.
    pub fn redraw(&mut self) {
        let shell = (self.controller.current() == Mode::Interactive).then_some(&self.session);
        self.screen.draw(shell);
    }

    pub fn handle_event(&mut self, event: Event) -> Handled {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Resize(cols, rows) => {
                tracing::trace!("Terminal resized to {}x{}", cols, rows);
                self.redraw();
                Handled::Done
            }
            _ => Handled::Done,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Handled {
        let mode = self.controller.current();
        match translate(key, mode) {
            AppKey::Shutdown => {
                self.screen.hide_views();
                play_shutdown(self.screen.boot_surface(), self.time.as_ref());
                self.running = false;
                Handled::Exit
            }
            AppKey::ToggleMode => {
                self.session.lock();
                self.controller
                    .toggle(&mut self.screen, &mut self.boot, self.store.as_mut());
                self.play_intro();
                Handled::Sequenced
            }
            AppKey::Edit(edit) if mode == Mode::Interactive => {
                self.session.handle_key(edit, &mut self.screen);
                Handled::Done
            }
            AppKey::Scroll(scroll) => {
                match mode {
                    Mode::Interactive => self.scroll_transcript(scroll),
                    Mode::Static => self.screen.scroll_static(scroll),
                }
                Handled::Done
            }
            AppKey::Edit(_) | AppKey::Ignored => Handled::Done,
        }
    }

    fn scroll_transcript(&mut self, key: ScrollKey) {
        let (cols, rows) = self.screen.size();
        let (main, _) = render::split(Rect::new(0, 0, cols, rows));
        let page = usize::from(main.height.saturating_sub(1)).max(1);
        let max = render::transcript_scroll_limit(&self.session, main);
        let transcript = self.session.transcript_mut();
        match key {
            ScrollKey::LineUp => transcript.scroll_up(1, max),
            ScrollKey::LineDown => transcript.scroll_down(1),
            ScrollKey::PageUp => transcript.scroll_up(page, max),
            ScrollKey::PageDown => transcript.scroll_down(page),
            ScrollKey::Top => transcript.scroll_up(max, max),
            ScrollKey::Bottom => transcript.scroll_to_end(),
        }
    }

    /// Run until shutdown.
    pub fn run(&mut self) -> anyhow::Result<()> {
        self.start();
        drain_input()?;
        while self.running {
            self.redraw();
            if !event::poll(TICK)? {
                continue;
            }
            if self.handle_event(event::read()?) == Handled::Sequenced {
                drain_input()?;
            }
        }
        tracing::info!("Event loop finished after {} boot runs", self.boot.runs());
        Ok(())
    }
}

/// Discard input queued while a sequence was playing.
fn drain_input() -> anyhow::Result<()> {
    let mut dropped = 0usize;
    while event::poll(Duration::ZERO)? {
        event::read()?;
        dropped += 1;
    }
    if dropped > 0 {
        tracing::debug!("Discarded {} events queued during a sequence", dropped);
    }
    Ok(())
}
