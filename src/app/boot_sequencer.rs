//! Plays a boot transcript onto a surface.
//!
//! One run: pick a variant, optionally ring the boot sound, show the boot
//! surface, append each line and wait its delay, wait the trailing delay,
//! then clear and hide the surface. Runs are strictly sequential; `run`
//! takes `&mut self`, so a second run cannot start inside the first.

use crate::model::boot_transcript::BootTranscript;
use crate::model::markup::Line;
use crate::services::effects::{EffectSink, SideEffect};
use crate::services::time_source::SharedTimeSource;
use crate::services::variant_picker::VariantPicker;
use std::time::Duration;

/// Where boot lines are shown.
pub trait BootSurface {
    /// Make the (empty) surface visible.
    fn show(&mut self);

    /// Append one rendered line.
    fn append(&mut self, line: Line);

    /// Remove every line and hide the surface.
    fn clear_and_hide(&mut self);
}

/// Result of [`BootSequencer::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootOutcome {
    Completed {
        variant: &'static str,
        lines: usize,
        /// Total suspension time, trailing delay included
        elapsed: Duration,
    },
    /// No surface (or no variants): nothing happened
    Skipped,
}

impl BootOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, BootOutcome::Completed { .. })
    }
}

pub struct BootSequencer {
    variants: Vec<BootTranscript>,
    picker: Box<dyn VariantPicker>,
    time: SharedTimeSource,
    trailing_delay: Duration,
    audio: Box<dyn EffectSink>,
    sound: bool,
    runs: usize,
}

impl std::fmt::Debug for BootSequencer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BootSequencer")
            .field("variants", &self.variants.len())
            .field("trailing_delay", &self.trailing_delay)
            .field("sound", &self.sound)
            .field("runs", &self.runs)
            .finish()
    }
}

impl BootSequencer {
    /// Pause after the last line before the surface is cleared.
    pub const DEFAULT_TRAILING_DELAY: Duration = Duration::from_millis(500);

    /// A sequencer over the built-in catalogue.
    pub fn new(
        picker: Box<dyn VariantPicker>,
        time: SharedTimeSource,
        audio: Box<dyn EffectSink>,
    ) -> Self {
        Self::with_variants(BootTranscript::catalogue(), picker, time, audio)
    }

    pub fn with_variants(
        variants: Vec<BootTranscript>,
        picker: Box<dyn VariantPicker>,
        time: SharedTimeSource,
        audio: Box<dyn EffectSink>,
    ) -> Self {
        Self {
            variants,
            picker,
            time,
            trailing_delay: Self::DEFAULT_TRAILING_DELAY,
            audio,
            sound: true,
            runs: 0,
        }
    }

    pub fn with_trailing_delay(mut self, delay: Duration) -> Self {
        self.trailing_delay = delay;
        self
    }

    pub fn with_sound(mut self, sound: bool) -> Self {
        self.sound = sound;
        self
    }

    pub fn variants(&self) -> &[BootTranscript] {
        &self.variants
    }

    pub fn trailing_delay(&self) -> Duration {
        self.trailing_delay
    }

    /// Completed runs so far.
    pub fn runs(&self) -> usize {
        self.runs
    }

    /// Play one boot run onto `target`. A missing target is a no-op.
    pub fn run(&mut self, target: Option<&mut dyn BootSurface>) -> BootOutcome {
        let Some(target) = target else {
            tracing::debug!("No boot surface, skipping boot run");
            return BootOutcome::Skipped;
        };
        if self.variants.is_empty() {
            tracing::warn!("No boot variants configured, skipping boot run");
            return BootOutcome::Skipped;
        }

        let index = self.picker.pick(self.variants.len()).min(self.variants.len() - 1);
        let transcript = &self.variants[index];
        tracing::debug!(
            "Boot run {} using variant {}",
            self.runs + 1,
            transcript.name
        );

        if self.sound {
            self.audio.fire(SideEffect::BootSound);
        }

        let start = self.time.now();
        target.show();
        for line in &transcript.lines {
            target.append(line.render());
            self.time.sleep(line.delay());
        }
        self.time.sleep(self.trailing_delay);
        target.clear_and_hide();

        self.runs += 1;
        BootOutcome::Completed {
            variant: transcript.name,
            lines: transcript.len(),
            elapsed: self.time.elapsed_since(start),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::effects::RecordingEffects;
    use crate::services::time_source::TestTimeSource;
    use crate::services::variant_picker::FixedPicker;
    use std::sync::Arc;

    /// Records every surface call.
    #[derive(Default)]
    struct RecordingSurface {
        visible: bool,
        lines: Vec<Line>,
        appended: usize,
        hides: usize,
    }

    impl BootSurface for RecordingSurface {
        fn show(&mut self) {
            self.visible = true;
        }

        fn append(&mut self, line: Line) {
            assert!(self.visible, "append before show");
            self.lines.push(line);
            self.appended += 1;
        }

        fn clear_and_hide(&mut self) {
            self.lines.clear();
            self.visible = false;
            self.hides += 1;
        }
    }

    fn sequencer(index: usize, time: Arc<TestTimeSource>, audio: RecordingEffects) -> BootSequencer {
        BootSequencer::new(Box::new(FixedPicker(index)), time, Box::new(audio))
    }

    #[test]
    fn test_every_variant_plays_all_lines_and_exact_delay() {
        for (index, variant) in BootTranscript::catalogue().iter().enumerate() {
            let time = TestTimeSource::shared();
            let mut boot = sequencer(index, time.clone(), RecordingEffects::new());
            let mut surface = RecordingSurface::default();

            let outcome = boot.run(Some(&mut surface));

            let expected = variant.total_delay() + Duration::from_millis(500);
            assert_eq!(
                outcome,
                BootOutcome::Completed {
                    variant: variant.name,
                    lines: variant.len(),
                    elapsed: expected,
                }
            );
            assert_eq!(surface.appended, variant.len());
            assert_eq!(time.elapsed(), expected);
            // One sleep per line plus the trailing pause
            assert_eq!(time.sleep_count(), variant.len() as u64 + 1);
        }
    }

    #[test]
    fn test_surface_is_cleared_and_hidden_afterwards() {
        let time = TestTimeSource::shared();
        let mut boot = sequencer(2, time, RecordingEffects::new());
        let mut surface = RecordingSurface::default();

        boot.run(Some(&mut surface));

        assert!(!surface.visible);
        assert!(surface.lines.is_empty());
        assert_eq!(surface.hides, 1);
        assert_eq!(boot.runs(), 1);
    }

    #[test]
    fn test_missing_surface_is_a_no_op() {
        let time = TestTimeSource::shared();
        let audio = RecordingEffects::new();
        let mut boot = sequencer(0, time.clone(), audio.clone());

        assert_eq!(boot.run(None), BootOutcome::Skipped);
        assert_eq!(time.elapsed(), Duration::ZERO);
        assert!(audio.fired().is_empty());
        assert_eq!(boot.runs(), 0);
    }

    #[test]
    fn test_boot_sound_is_optional() {
        let audio = RecordingEffects::new();
        let mut boot = sequencer(0, TestTimeSource::shared(), audio.clone());
        boot.run(Some(&mut RecordingSurface::default()));
        assert_eq!(audio.fired(), vec![SideEffect::BootSound]);

        let quiet = RecordingEffects::new();
        let mut boot =
            sequencer(0, TestTimeSource::shared(), quiet.clone()).with_sound(false);
        boot.run(Some(&mut RecordingSurface::default()));
        assert!(quiet.fired().is_empty());
    }

    #[test]
    fn test_custom_trailing_delay() {
        let time = TestTimeSource::shared();
        let mut boot = sequencer(2, time.clone(), RecordingEffects::new())
            .with_trailing_delay(Duration::ZERO);
        boot.run(Some(&mut RecordingSurface::default()));
        assert_eq!(time.elapsed(), BootTranscript::minimal().total_delay());
    }
}
