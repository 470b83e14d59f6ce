// Integration tests - testing how modules work together

mod common;

use common::{dispatch, full_content, shared};
use proptest::prelude::*;
use std::time::Duration;
use termfolio::app::boot_sequencer::{BootOutcome, BootSequencer, BootSurface};
use termfolio::app::mode_controller::{ModeController, Presentation};
use termfolio::app::session::{ShellHost, ShellSession};
use termfolio::config::ShellConfig;
use termfolio::content::ContentData;
use termfolio::input::command_registry::CommandRegistry;
use termfolio::input::commands::CommandOutput;
use termfolio::input::line_editor::{EditKey, LineEditor};
use termfolio::model::boot_transcript::BootTranscript;
use termfolio::model::markup::{Line, Tag};
use termfolio::model::mode::{Mode, ToggleLabel};
use termfolio::services::effects::{RecordingEffects, SideEffect};
use termfolio::services::mode_store::{FileModeStore, ModeStore};
use termfolio::services::time_source::TestTimeSource;
use termfolio::services::variant_picker::{FixedPicker, RandomPicker};

#[derive(Default)]
struct FakeScreen {
    boot_lines: usize,
    revealed: Option<Mode>,
    label: Option<ToggleLabel>,
    effects: Vec<SideEffect>,
}

impl BootSurface for FakeScreen {
    fn show(&mut self) {}

    fn append(&mut self, _line: Line) {
        self.boot_lines += 1;
    }

    fn clear_and_hide(&mut self) {}
}

impl Presentation for FakeScreen {
    fn hide_views(&mut self) {
        self.revealed = None;
    }

    fn reveal(&mut self, mode: Mode) {
        self.revealed = Some(mode);
    }

    fn set_toggle_label(&mut self, label: ToggleLabel) {
        self.label = Some(label);
    }

    fn set_entry_param(&mut self, _mode: Mode) {}

    fn boot_surface(&mut self) -> Option<&mut dyn BootSurface> {
        Some(self)
    }
}

impl ShellHost for FakeScreen {
    fn fire(&mut self, effect: SideEffect) {
        self.effects.push(effect);
    }

    fn refresh(&mut self, _session: &ShellSession) {}
}

fn editor() -> LineEditor {
    LineEditor::new(CommandRegistry::new().names().collect::<Vec<_>>())
}

fn type_into(editor: &mut LineEditor, text: &str) {
    for c in text.chars() {
        editor.handle(EditKey::Char(c));
    }
}

/// `help` renders the same text whatever the content says
#[test]
fn test_help_is_independent_of_content() {
    common::tracing::init_tracing_from_env();
    let with_full = dispatch(&full_content(), "help");
    let with_fallback = dispatch(&ContentData::fallback(), "help");
    assert_eq!(with_full, with_fallback);
    assert!(with_full.markup().unwrap().text().contains("whoami"));
}

#[test]
fn test_ls_default_matches_projects_dir() {
    let content = full_content();
    let bare = dispatch(&content, "ls");
    let named = dispatch(&content, "ls projects");
    assert_eq!(bare, named);
    assert_eq!(
        bare.markup().unwrap().spans_tagged(Tag::Directory),
        vec!["kernel", "vcs"]
    );
    assert!(dispatch(&content, "ls etc").is_error());
}

#[test]
fn test_whoami_on_fallback_content() {
    let result = dispatch(&ContentData::fallback(), "whoami");
    let markup = result.markup().expect("whoami shows text");
    assert!(!result.is_error());
    assert_eq!(markup.spans_tagged(Tag::Name), vec!["Abhijit Rayarao"]);
    assert_eq!(markup.spans_tagged(Tag::Role), vec!["Software Engineer"]);
    assert!(markup.spans_tagged(Tag::Chip).is_empty());
}

#[test]
fn test_cat_readme_is_case_insensitive() {
    let content = full_content();
    let lower = dispatch(&content, "cat readme.md");
    assert!(!lower.is_error());
    assert_eq!(lower, dispatch(&content, "cat README.md"));
    let text = lower.markup().unwrap().text();
    assert!(text.contains("A monolithic kernel"));
    assert!(text.contains("github.com/linus"));
    assert!(dispatch(&content, "cat notes.txt").is_error());
}

#[test]
fn test_clear_requests_flash() {
    let result = dispatch(&full_content(), "clear");
    assert_eq!(result.output, CommandOutput::ClearScreen);
    assert_eq!(result.effects, vec![SideEffect::Flash]);
}

#[test]
fn test_history_walk() {
    let mut ed = editor();
    type_into(&mut ed, "whoami");
    ed.handle(EditKey::Enter);
    type_into(&mut ed, "help");
    ed.handle(EditKey::Enter);

    ed.handle(EditKey::Up);
    ed.handle(EditKey::Up);
    assert_eq!(ed.buffer(), "whoami");
    ed.handle(EditKey::Down);
    assert_eq!(ed.buffer(), "help");
    ed.handle(EditKey::Down);
    assert_eq!(ed.buffer(), "");
}

#[test]
fn test_tab_completion() {
    let mut ed = editor();
    type_into(&mut ed, "he");
    ed.handle(EditKey::Tab);
    assert_eq!(ed.buffer(), "help ");

    let mut ed = editor();
    type_into(&mut ed, "help");
    ed.handle(EditKey::Tab);
    assert_eq!(ed.buffer(), "help");
}

#[test]
fn test_every_variant_boots_with_exact_timing() {
    for (index, variant) in BootTranscript::catalogue().iter().enumerate() {
        let time = TestTimeSource::shared();
        let mut boot = BootSequencer::new(
            Box::new(FixedPicker(index)),
            time.clone(),
            Box::new(RecordingEffects::new()),
        );
        let mut screen = FakeScreen::default();

        let outcome = boot.run(Some(&mut screen));

        let expected = variant.total_delay() + BootSequencer::DEFAULT_TRAILING_DELAY;
        assert!(outcome.is_completed());
        assert_eq!(screen.boot_lines, variant.len());
        assert_eq!(time.elapsed(), expected);
    }
}

#[test]
fn test_random_picker_only_picks_catalogue_variants() {
    let names: Vec<&str> = BootTranscript::catalogue().iter().map(|t| t.name).collect();
    let mut boot = BootSequencer::new(
        Box::new(RandomPicker::seeded(42)),
        TestTimeSource::shared(),
        Box::new(RecordingEffects::new()),
    );
    for _ in 0..20 {
        match boot.run(Some(&mut FakeScreen::default())) {
            BootOutcome::Completed { variant, .. } => assert!(names.contains(&variant)),
            BootOutcome::Skipped => panic!("boot skipped with a surface"),
        }
    }
}

#[test]
fn test_double_toggle_persists_and_boots_twice() {
    let temp = tempfile::TempDir::new().unwrap();
    let mut store = FileModeStore::new(temp.path().join("state.json"));
    let mut boot = BootSequencer::new(
        Box::new(FixedPicker(0)),
        TestTimeSource::shared(),
        Box::new(RecordingEffects::new()),
    );
    let mut screen = FakeScreen::default();
    let mut controller = ModeController::resolve(None, &store, (120, 40), &Default::default());
    assert_eq!(controller.current(), Mode::Interactive);

    controller.toggle(&mut screen, &mut boot, &mut store);
    assert_eq!(store.load(), Some(Mode::Static));
    assert_eq!(screen.revealed, Some(Mode::Static));
    assert_eq!(screen.label.map(|l| l.text), Some("Terminal"));

    controller.toggle(&mut screen, &mut boot, &mut store);
    assert_eq!(controller.current(), Mode::Interactive);
    assert_eq!(boot.runs(), 2);

    // A fresh start picks the persisted mode up
    let restarted = ModeController::resolve(None, &store, (120, 40), &Default::default());
    assert_eq!(restarted.current(), Mode::Interactive);
}

#[test]
fn test_session_scenario() {
    let time = TestTimeSource::shared();
    let mut session = ShellSession::new(shared(full_content()), ShellConfig::default(), time.clone());
    let mut screen = FakeScreen::default();
    session.play_intro(&mut screen);

    for line in ["whoami", "sudo hire me", "rm -rf /"] {
        for c in line.chars() {
            session.handle_key(EditKey::Char(c), &mut screen);
        }
        session.handle_key(EditKey::Enter, &mut screen);
    }

    assert_eq!(screen.effects, vec![SideEffect::Confetti, SideEffect::Glitch]);
    let text = session.transcript().text();
    assert!(text.contains("Kernel Hacker"));
    assert!(text.contains("linus@example.org"));
    assert!(text.contains("System Recovery Mode"));
    assert!(time.elapsed() >= Duration::from_millis(1000));
}

proptest! {
    /// Dispatch never panics and always yields a result, whatever the input
    #[test]
    fn prop_dispatch_total(name in "[a-zA-Z]{1,10}", args in proptest::collection::vec("[ -~]{0,8}", 0..4)) {
        let registry = CommandRegistry::new();
        let mut names: Vec<String> = registry.names().map(str::to_string).collect();
        names.push(name);
        let content = full_content();
        for name in names {
            let line = format!("{} {}", name, args.join(" "));
            let result = dispatch(&content, &line);
            if let Some(markup) = result.markup() {
                prop_assert!(!markup.is_empty());
            }
        }
    }
}
