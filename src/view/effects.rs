//! Decorative effects drawn over the frame.
//!
//! Effects are timed: firing one records its deadline, and every draw
//! paints whatever is still live. Nothing here blocks.

use crate::services::effects::{EffectSink, SideEffect};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use std::io::Write;
use std::time::{Duration, Instant};

const CONFETTI_PIECES: usize = 50;
const CONFETTI_GLYPHS: [&str; 6] = ["*", "+", "•", "◆", "▪", "✦"];
const CONFETTI_COLORS: [Color; 6] = [
    Color::LightRed,
    Color::LightYellow,
    Color::LightGreen,
    Color::LightCyan,
    Color::LightBlue,
    Color::LightMagenta,
];
const GLITCH_GLYPHS: [&str; 10] = ["█", "▓", "▒", "░", "#", "@", "%", "&", "/", "\\"];
/// Confetti fall speed, in rows per second
const CONFETTI_SPEED: u64 = 8;

#[derive(Debug, Clone, Copy)]
struct Piece {
    /// Horizontal position as a fraction of the width, in 1/1000
    x: u16,
    /// Starting row offset
    row: u16,
    glyph: usize,
    color: usize,
}

/// Live effect state.
#[derive(Debug)]
pub struct EffectOverlay {
    live: Vec<(SideEffect, Instant, Instant)>,
    confetti: Vec<Piece>,
    rng: StdRng,
}

impl Default for EffectOverlay {
    fn default() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl EffectOverlay {
    pub fn new(rng: StdRng) -> Self {
        Self {
            live: Vec::new(),
            confetti: Vec::new(),
            rng,
        }
    }

    /// Start `effect` at `now`. Effects without a duration are ignored.
    pub fn start(&mut self, effect: SideEffect, now: Instant) {
        let duration = effect.duration();
        if duration.is_zero() {
            return;
        }
        if effect == SideEffect::Confetti {
            self.confetti = (0..CONFETTI_PIECES)
                .map(|_| Piece {
                    x: self.rng.gen_range(0..1000),
                    row: self.rng.gen_range(0..40),
                    glyph: self.rng.gen_range(0..CONFETTI_GLYPHS.len()),
                    color: self.rng.gen_range(0..CONFETTI_COLORS.len()),
                })
                .collect();
        }
        self.live.retain(|(e, _, _)| *e != effect);
        self.live.push((effect, now, now + duration));
        tracing::debug!("Effect {} started", effect);
    }

    /// Drop effects whose deadline has passed.
    pub fn prune(&mut self, now: Instant) {
        self.live.retain(|(_, _, until)| *until > now);
        if !self.is_active(SideEffect::Confetti) {
            self.confetti.clear();
        }
    }

    pub fn is_active(&self, effect: SideEffect) -> bool {
        self.live.iter().any(|(e, _, _)| *e == effect)
    }

    pub fn is_idle(&self) -> bool {
        self.live.is_empty()
    }

    /// Paint live effects into `buf`.
    pub fn paint(&mut self, buf: &mut Buffer, area: Rect, now: Instant) {
        self.prune(now);
        if area.is_empty() {
            return;
        }
        if self.is_active(SideEffect::Glitch) {
            self.paint_glitch(buf, area);
        }
        if let Some((_, started, _)) = self
            .live
            .iter()
            .find(|(e, _, _)| *e == SideEffect::Confetti)
        {
            let elapsed = now.saturating_duration_since(*started);
            self.paint_confetti(buf, area, elapsed);
        }
        if self.is_active(SideEffect::Flash) {
            for y in area.top()..area.bottom() {
                for x in area.left()..area.right() {
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        cell.modifier.toggle(Modifier::REVERSED);
                    }
                }
            }
        }
    }

    fn paint_glitch(&mut self, buf: &mut Buffer, area: Rect) {
        let rows = (area.height / 4).max(1);
        let style = Style::default().fg(Color::LightRed).bg(Color::Black);
        for _ in 0..rows {
            let y = area.top() + self.rng.gen_range(0..area.height);
            let shift = self.rng.gen_range(0..area.width.max(1));
            for x in area.left()..area.right() {
                if self.rng.gen_bool(0.35) {
                    let glyph = GLITCH_GLYPHS[self.rng.gen_range(0..GLITCH_GLYPHS.len())];
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        cell.set_symbol(glyph).set_style(style);
                    }
                } else if let Some(cell) = buf.cell_mut(((x + shift) % area.right().max(1), y)) {
                    cell.set_style(style);
                }
            }
        }
    }

    fn paint_confetti(&self, buf: &mut Buffer, area: Rect, elapsed: Duration) {
        let fallen = (elapsed.as_millis() as u64 * CONFETTI_SPEED / 1000) as u16;
        for piece in &self.confetti {
            let x = area.left() + (u32::from(piece.x) * u32::from(area.width) / 1000) as u16;
            let y = area.top() + (piece.row.wrapping_add(fallen)) % area.height;
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(CONFETTI_GLYPHS[piece.glyph])
                    .set_fg(CONFETTI_COLORS[piece.color]);
            }
        }
    }
}

/// Rings the terminal bell for the boot sound.
#[derive(Debug, Default)]
pub struct TerminalBell;

impl EffectSink for TerminalBell {
    fn fire(&mut self, effect: SideEffect) {
        if effect != SideEffect::BootSound {
            return;
        }
        let mut out = std::io::stdout();
        if let Err(e) = out.write_all(b"\x07").and_then(|_| out.flush()) {
            tracing::trace!("Bell failed: {}", e);
        }
    }
}
