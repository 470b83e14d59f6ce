//! Typewriter intros played after a boot run.
//!
//! The terminal intro lives on [`ShellSession`](super::session::ShellSession)
//! because it writes into the transcript. The static intro types the hero
//! block of the static document through a [`HeroSurface`].

use crate::content::ContentData;
use crate::services::time_source::TimeSource;
use std::time::Duration;

/// Per-character delay for the hero name.
pub const HERO_NAME_DELAY: Duration = Duration::from_millis(50);
/// Pause between the hero name and the stack line.
pub const HERO_LINE_PAUSE: Duration = Duration::from_millis(300);
/// Per-character delay for the hero stack line.
pub const HERO_STACK_DELAY: Duration = Duration::from_millis(20);

/// Which hero line is being typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroField {
    Name,
    Stack,
}

/// The static view's hero block.
pub trait HeroSurface {
    /// Empty both hero lines.
    fn clear_hero(&mut self);

    /// Append one character to a hero line and redraw.
    fn type_hero(&mut self, field: HeroField, c: char);
}

/// Emit `text` one character at a time, sleeping `per_char` after each.
pub fn typewrite(
    text: &str,
    per_char: Duration,
    time: &dyn TimeSource,
    mut emit: impl FnMut(char),
) {
    for c in text.chars() {
        emit(c);
        time.sleep(per_char);
    }
}

/// Type the static hero: the lower-cased name, a pause, then the stack line.
pub fn play_static_intro(surface: &mut dyn HeroSurface, content: &ContentData, time: &dyn TimeSource) {
    surface.clear_hero();
    let name = content.profile.name.to_lowercase();
    typewrite(&name, HERO_NAME_DELAY, time, |c| {
        surface.type_hero(HeroField::Name, c)
    });
    time.sleep(HERO_LINE_PAUSE);
    typewrite(&content.stack_line(), HERO_STACK_DELAY, time, |c| {
        surface.type_hero(HeroField::Stack, c)
    });
    tracing::debug!("Static intro finished");
}
