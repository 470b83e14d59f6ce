//! Key translation from terminal events to app keys.
//!
//! Translation happens in two steps:
//! 1. Terminal quirks are normalized (some terminals send `Char('\x7f')` for
//!    Backspace, or a bare `Char('\r')` for Enter)
//! 2. The normalized event is mapped to an [`AppKey`] for the active mode
//!
//! Chords the app does not bind are dropped as [`AppKey::Ignored`]; they are
//! never typed into the shell.

use super::line_editor::EditKey;
use crate::model::mode::Mode;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Scrolling intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollKey {
    LineUp,
    LineDown,
    PageUp,
    PageDown,
    Top,
    Bottom,
}

/// What a key press means to the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppKey {
    /// Input for the shell's line editor
    Edit(EditKey),
    Scroll(ScrollKey),
    /// Switch between terminal and static mode
    ToggleMode,
    /// Play the shutdown sequence and exit
    Shutdown,
    Ignored,
}

/// Normalize known terminal quirks.
pub fn normalize(event: KeyEvent) -> KeyEvent {
    let code = match event.code {
        KeyCode::Char('\x7f') | KeyCode::Char('\x08') => KeyCode::Backspace,
        KeyCode::Char('\r') | KeyCode::Char('\n') => KeyCode::Enter,
        KeyCode::Char('\t') => KeyCode::Tab,
        other => other,
    };
    KeyEvent { code, ..event }
}

/// Map a terminal key event to an app key for the active mode.
pub fn translate(event: KeyEvent, mode: Mode) -> AppKey {
    if event.kind != KeyEventKind::Press {
        return AppKey::Ignored;
    }
    let event = normalize(event);
    let mods = event.modifiers;
    let ctrl = mods.contains(KeyModifiers::CONTROL);
    let chord = ctrl || mods.intersects(KeyModifiers::ALT | KeyModifiers::SUPER | KeyModifiers::META);

    match event.code {
        KeyCode::Char(c) if ctrl && matches!(c.to_ascii_lowercase(), 'q' | 'c') => AppKey::Shutdown,
        KeyCode::Char(c) if ctrl && c.eq_ignore_ascii_case(&'t') => AppKey::ToggleMode,
        _ if chord => AppKey::Ignored,

        KeyCode::PageUp => AppKey::Scroll(ScrollKey::PageUp),
        KeyCode::PageDown => AppKey::Scroll(ScrollKey::PageDown),

        _ => match mode {
            Mode::Interactive => match event.code {
                KeyCode::Char(c) => AppKey::Edit(EditKey::Char(c)),
                KeyCode::Backspace => AppKey::Edit(EditKey::Backspace),
                KeyCode::Enter => AppKey::Edit(EditKey::Enter),
                KeyCode::Up => AppKey::Edit(EditKey::Up),
                KeyCode::Down => AppKey::Edit(EditKey::Down),
                KeyCode::Tab => AppKey::Edit(EditKey::Tab),
                _ => AppKey::Ignored,
            },
            Mode::Static => match event.code {
                KeyCode::Up | KeyCode::Char('k') => AppKey::Scroll(ScrollKey::LineUp),
                KeyCode::Down | KeyCode::Char('j') => AppKey::Scroll(ScrollKey::LineDown),
                KeyCode::Char(' ') => AppKey::Scroll(ScrollKey::PageDown),
                KeyCode::Home | KeyCode::Char('g') => AppKey::Scroll(ScrollKey::Top),
                KeyCode::End | KeyCode::Char('G') => AppKey::Scroll(ScrollKey::Bottom),
                _ => AppKey::Ignored,
            },
        },
    }
}
