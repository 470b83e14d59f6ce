//! Tracks the active presentation mode and drives transitions.
//!
//! The startup mode is resolved once, in priority order: the entry
//! parameter (`--mode`), the persisted mode, then a compact-terminal
//! heuristic (a small terminal starts in Static). Each actual transition
//! persists the mode, updates the entry parameter, hides both views, plays
//! a boot run and then reveals the matching view.

use super::boot_sequencer::{BootOutcome, BootSequencer, BootSurface};
use crate::config::DisplayConfig;
use crate::model::mode::{Mode, ToggleLabel};
use crate::services::mode_store::ModeStore;

/// The surfaces a mode transition manipulates.
pub trait Presentation {
    /// Hide the terminal view and the static view.
    fn hide_views(&mut self);

    /// Show exactly the view for `mode`.
    fn reveal(&mut self, mode: Mode);

    fn set_toggle_label(&mut self, label: ToggleLabel);

    /// Record `mode` as the addressable entry parameter.
    fn set_entry_param(&mut self, mode: Mode);

    /// The boot surface, if this presentation has one.
    fn boot_surface(&mut self) -> Option<&mut dyn BootSurface>;
}

/// Where the startup mode came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeOrigin {
    EntryParam,
    Persisted,
    CompactTerminal,
    Default,
}

#[derive(Debug, Clone)]
pub struct ModeController {
    current: Mode,
    origin: ModeOrigin,
    transitions: usize,
}

impl ModeController {
    pub fn new(mode: Mode) -> Self {
        Self {
            current: mode,
            origin: ModeOrigin::Default,
            transitions: 0,
        }
    }

    /// Resolve the startup mode.
    pub fn resolve(
        entry_param: Option<Mode>,
        store: &dyn ModeStore,
        size: (u16, u16),
        display: &DisplayConfig,
    ) -> Self {
        let (mode, origin) = if let Some(mode) = entry_param {
            (mode, ModeOrigin::EntryParam)
        } else if let Some(mode) = store.load() {
            (mode, ModeOrigin::Persisted)
        } else if display.is_compact(size.0, size.1) {
            (Mode::Static, ModeOrigin::CompactTerminal)
        } else {
            (Mode::Interactive, ModeOrigin::Default)
        };
        tracing::info!("Starting in {} mode ({:?})", mode, origin);
        Self {
            current: mode,
            origin,
            transitions: 0,
        }
    }

    pub fn current(&self) -> Mode {
        self.current
    }

    pub fn origin(&self) -> ModeOrigin {
        self.origin
    }

    /// Completed transitions since startup.
    pub fn transitions(&self) -> usize {
        self.transitions
    }

    /// Show the current mode without a transition (used at startup).
    pub fn apply(&self, presentation: &mut dyn Presentation) {
        presentation.set_entry_param(self.current);
        presentation.reveal(self.current);
        presentation.set_toggle_label(self.current.toggle_label());
    }

    /// Switch to `target`. Returns false (and does nothing) if it is
    /// already active.
    pub fn set_mode(
        &mut self,
        target: Mode,
        presentation: &mut dyn Presentation,
        boot: &mut BootSequencer,
        store: &mut dyn ModeStore,
    ) -> bool {
        if target == self.current {
            return false;
        }
        tracing::debug!("Mode transition {} -> {}", self.current, target);

        self.current = target;
        store.save(target);
        presentation.set_entry_param(target);
        presentation.hide_views();

        if let BootOutcome::Completed { variant, elapsed, .. } = boot.run(presentation.boot_surface()) {
            tracing::debug!("Boot variant {} took {:?}", variant, elapsed);
        }

        presentation.reveal(target);
        presentation.set_toggle_label(target.toggle_label());
        self.transitions += 1;
        true
    }

    /// Flip to the other mode. Returns the new mode.
    pub fn toggle(
        &mut self,
        presentation: &mut dyn Presentation,
        boot: &mut BootSequencer,
        store: &mut dyn ModeStore,
    ) -> Mode {
        self.set_mode(self.current.flipped(), presentation, boot, store);
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::markup::Line;
    use crate::services::effects::NullEffects;
    use crate::services::mode_store::MemoryModeStore;
    use crate::services::time_source::TestTimeSource;
    use crate::services::variant_picker::FixedPicker;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Hide,
        Reveal(Mode),
        Label(&'static str),
        Param(Mode),
        BootShow,
        BootHide,
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
        boot_lines: usize,
        headless: bool,
    }

    impl BootSurface for Recorder {
        fn show(&mut self) {
            self.calls.push(Call::BootShow);
        }

        fn append(&mut self, _line: Line) {
            self.boot_lines += 1;
        }

        fn clear_and_hide(&mut self) {
            self.calls.push(Call::BootHide);
        }
    }

    impl Presentation for Recorder {
        fn hide_views(&mut self) {
            self.calls.push(Call::Hide);
        }

        fn reveal(&mut self, mode: Mode) {
            self.calls.push(Call::Reveal(mode));
        }

        fn set_toggle_label(&mut self, label: ToggleLabel) {
            self.calls.push(Call::Label(label.text));
        }

        fn set_entry_param(&mut self, mode: Mode) {
            self.calls.push(Call::Param(mode));
        }

        fn boot_surface(&mut self) -> Option<&mut dyn BootSurface> {
            if self.headless {
                None
            } else {
                Some(self)
            }
        }
    }

    fn boot() -> BootSequencer {
        BootSequencer::new(
            Box::new(FixedPicker(0)),
            TestTimeSource::shared(),
            Box::new(NullEffects),
        )
    }

    #[test]
    fn test_resolve_priority() {
        let display = DisplayConfig::default();
        let wide = (120, 40);
        let narrow = (60, 40);
        let stored = MemoryModeStore::with_mode(Mode::Static);
        let empty = MemoryModeStore::new();

        let c = ModeController::resolve(Some(Mode::Interactive), &stored, narrow, &display);
        assert_eq!((c.current(), c.origin()), (Mode::Interactive, ModeOrigin::EntryParam));

        let c = ModeController::resolve(None, &stored, wide, &display);
        assert_eq!((c.current(), c.origin()), (Mode::Static, ModeOrigin::Persisted));

        let c = ModeController::resolve(None, &empty, narrow, &display);
        assert_eq!((c.current(), c.origin()), (Mode::Static, ModeOrigin::CompactTerminal));

        let c = ModeController::resolve(None, &empty, wide, &display);
        assert_eq!((c.current(), c.origin()), (Mode::Interactive, ModeOrigin::Default));
    }

    #[test]
    fn test_set_same_mode_is_a_no_op() {
        let mut controller = ModeController::new(Mode::Interactive);
        let mut screen = Recorder::default();
        let mut store = MemoryModeStore::new();
        let mut boot = boot();

        assert!(!controller.set_mode(Mode::Interactive, &mut screen, &mut boot, &mut store));
        assert!(screen.calls.is_empty());
        assert_eq!(store.writes(), 0);
        assert_eq!(boot.runs(), 0);
    }

    #[test]
    fn test_transition_order() {
        let mut controller = ModeController::new(Mode::Interactive);
        let mut screen = Recorder::default();
        let mut store = MemoryModeStore::new();
        let mut boot = boot();

        assert!(controller.set_mode(Mode::Static, &mut screen, &mut boot, &mut store));

        assert_eq!(
            screen.calls,
            vec![
                Call::Param(Mode::Static),
                Call::Hide,
                Call::BootShow,
                Call::BootHide,
                Call::Reveal(Mode::Static),
                Call::Label("Terminal"),
            ]
        );
        assert!(screen.boot_lines > 0);
        assert_eq!(store.load(), Some(Mode::Static));
    }

    #[test]
    fn test_double_toggle_returns_and_boots_twice() {
        let mut controller = ModeController::new(Mode::Static);
        let mut screen = Recorder::default();
        let mut store = MemoryModeStore::new();
        let mut boot = boot();

        assert_eq!(controller.toggle(&mut screen, &mut boot, &mut store), Mode::Interactive);
        assert_eq!(controller.toggle(&mut screen, &mut boot, &mut store), Mode::Static);

        assert_eq!(boot.runs(), 2);
        assert_eq!(controller.transitions(), 2);
        assert_eq!(store.writes(), 2);
        assert_eq!(store.load(), Some(Mode::Static));
    }

    #[test]
    fn test_transition_without_boot_surface_still_reveals() {
        let mut controller = ModeController::new(Mode::Interactive);
        let mut screen = Recorder {
            headless: true,
            ..Default::default()
        };
        let mut store = MemoryModeStore::new();
        let mut boot = boot();

        controller.toggle(&mut screen, &mut boot, &mut store);

        assert_eq!(boot.runs(), 0);
        assert!(screen.calls.contains(&Call::Reveal(Mode::Static)));
    }

    #[test]
    fn test_apply_reveals_current_mode() {
        let controller = ModeController::new(Mode::Interactive);
        let mut screen = Recorder::default();
        controller.apply(&mut screen);
        assert_eq!(
            screen.calls,
            vec![
                Call::Param(Mode::Interactive),
                Call::Reveal(Mode::Interactive),
                Call::Label("Static"),
            ]
        );
    }
}
