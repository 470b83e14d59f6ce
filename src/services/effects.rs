//! Fire-and-forget audio/visual side effects.
//!
//! The shell core only *names* an effect; whoever implements
//! [`EffectSink`] decides what it looks or sounds like. Sinks never report
//! back, and a sink that cannot perform an effect simply drops it.

use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SideEffect {
    /// Notification sound at the start of a boot run
    BootSound,
    /// Brief flash of the transcript surface (`clear`)
    Flash,
    /// Confetti burst (`sudo hire me`)
    Confetti,
    /// Glitch overlay (`rm -rf /`)
    Glitch,
}

impl SideEffect {
    /// How long the visual lasts once fired.
    pub fn duration(self) -> Duration {
        match self {
            SideEffect::BootSound => Duration::ZERO,
            SideEffect::Flash => Duration::from_millis(150),
            SideEffect::Glitch => Duration::from_millis(500),
            SideEffect::Confetti => Duration::from_secs(5),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SideEffect::BootSound => "boot-sound",
            SideEffect::Flash => "flash",
            SideEffect::Confetti => "confetti",
            SideEffect::Glitch => "glitch",
        }
    }
}

impl fmt::Display for SideEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Something that can perform side effects.
pub trait EffectSink {
    fn fire(&mut self, effect: SideEffect);
}

/// Drops every effect.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullEffects;

impl EffectSink for NullEffects {
    fn fire(&mut self, effect: SideEffect) {
        tracing::trace!("Dropping effect {}", effect);
    }
}

/// Records fired effects; clones share the same log.
#[derive(Debug, Default, Clone)]
pub struct RecordingEffects {
    log: Arc<Mutex<Vec<SideEffect>>>,
}

impl RecordingEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Effects fired so far, in order.
    pub fn fired(&self) -> Vec<SideEffect> {
        self.log.lock().map(|l| l.clone()).unwrap_or_default()
    }

    pub fn count(&self, effect: SideEffect) -> usize {
        self.fired().iter().filter(|e| **e == effect).count()
    }
}

impl EffectSink for RecordingEffects {
    fn fire(&mut self, effect: SideEffect) {
        if let Ok(mut log) = self.log.lock() {
            log.push(effect);
        }
    }
}
