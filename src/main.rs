use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::stdout;
use std::path::PathBuf;
use std::sync::Arc;
use termfolio::app::runtime::{App, AppServices};
use termfolio::config::Config;
use termfolio::config_io::DirectoryContext;
use termfolio::content::ContentData;
use termfolio::model::mode::Mode;
use termfolio::services::mode_store::FileModeStore;
use termfolio::services::terminal_modes::{self, TerminalModes};
use termfolio::services::time_source::RealTimeSource;
use termfolio::services::variant_picker::RandomPicker;
use termfolio::services::{log_dirs, tracing_setup};
use termfolio::view::effects::TerminalBell;

/// A portfolio that boots like a Linux box
#[derive(Parser, Debug)]
#[command(name = "termfolio")]
#[command(about = "A terminal portfolio with a fake shell and a static resume view", long_about = None)]
#[command(version)]
struct Args {
    /// Start in this mode: terminal or static (overrides the saved mode)
    #[arg(long, value_name = "MODE")]
    mode: Option<Mode>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to the content document (JSON)
    #[arg(long, value_name = "PATH")]
    content: Option<PathBuf>,

    /// Path to log file for diagnostics
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,

    /// Print the directories used by termfolio and exit
    #[arg(long)]
    show_paths: bool,
}

fn main() -> AnyhowResult<()> {
    let args = Args::parse();
    let dirs = DirectoryContext::from_system().context("Failed to resolve system directories")?;

    // Handle --show-paths early (no terminal setup needed)
    if args.show_paths {
        log_dirs::print_all_paths(&dirs);
        return Ok(());
    }

    // Handle --dump-config early (no terminal setup needed)
    if args.dump_config {
        let (config, _) = Config::resolve(args.config.as_deref(), &dirs)?;
        println!("{}", config.to_json()?);
        return Ok(());
    }

    let log_file = args.log_file.clone().unwrap_or_else(log_dirs::main_log_path);
    tracing_setup::init_global(&log_file);
    log_dirs::cleanup_stale_logs();
    tracing::info!("termfolio starting");

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        terminal_modes::emergency_cleanup();
        original_hook(panic);
    }));

    let (config, source) = Config::resolve(args.config.as_deref(), &dirs)
        .context("Failed to load configuration")?;
    tracing::info!("Using config from {:?}", source);

    let content_path = config.content_path_for(args.content.as_deref(), &dirs);
    let content = Arc::new(ContentData::load_or_fallback(content_path.as_deref()));

    let services = AppServices {
        time: RealTimeSource::shared(),
        picker: Box::new(RandomPicker::from_entropy()),
        audio: Box::new(TerminalBell),
        store: Box::new(FileModeStore::new(dirs.state_path())),
    };

    let mut terminal_modes = TerminalModes::enable()?;
    let terminal =
        Terminal::new(CrosstermBackend::new(stdout())).context("Failed to create terminal")?;

    let mut app = App::new(terminal, &config, content, args.mode, services);
    let result = app.run();

    terminal_modes.undo();
    if let Err(e) = &result {
        tracing::error!("Event loop failed: {:#}", e);
    }
    result
}
