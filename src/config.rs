use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Color theme: "dark" or "light"
    #[serde(default = "default_theme_name")]
    pub theme: String,

    /// Content document to load; the fallback profile is used when unset
    #[serde(default)]
    pub content_path: Option<PathBuf>,

    #[serde(default)]
    pub boot: BootConfig,

    #[serde(default)]
    pub shell: ShellConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

fn default_theme_name() -> String {
    "dark".to_string()
}

pub const THEME_NAMES: [&str; 2] = ["dark", "light"];

/// Boot sequence configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BootConfig {
    /// Pause after the last boot line before the boot surface is cleared
    #[serde(default = "default_trailing_delay")]
    pub trailing_delay_ms: u64,

    /// Ring the terminal bell when a boot run starts
    #[serde(default = "default_true")]
    pub sound: bool,
}

fn default_trailing_delay() -> u64 {
    500
}

fn default_true() -> bool {
    true
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            trailing_delay_ms: default_trailing_delay(),
            sound: true,
        }
    }
}

/// Interactive shell configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Directory segment of the prompt
    #[serde(default = "default_prompt_dir")]
    pub prompt_dir: String,

    /// Git segment of the prompt
    #[serde(default = "default_git_branch")]
    pub git_branch: String,

    /// Host name shown in the status bar
    #[serde(default = "default_host_name")]
    pub host_name: String,

    /// Per-character delay when typing the intro
    #[serde(default = "default_typing_delay")]
    pub typing_delay_ms: u64,

    /// Pause after each typed intro line
    #[serde(default = "default_intro_line_pause")]
    pub intro_line_pause_ms: u64,

    /// Pause between the glitch and the recovery message of `rm -rf /`
    #[serde(default = "default_pause_after_rm")]
    pub pause_after_rm_ms: u64,
}

fn default_prompt_dir() -> String {
    "~/portfolio".to_string()
}

fn default_git_branch() -> String {
    "main".to_string()
}

fn default_host_name() -> String {
    "portfolio".to_string()
}

fn default_typing_delay() -> u64 {
    50
}

fn default_intro_line_pause() -> u64 {
    300
}

fn default_pause_after_rm() -> u64 {
    1000
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt_dir: default_prompt_dir(),
            git_branch: default_git_branch(),
            host_name: default_host_name(),
            typing_delay_ms: default_typing_delay(),
            intro_line_pause_ms: default_intro_line_pause(),
            pause_after_rm_ms: default_pause_after_rm(),
        }
    }
}

/// Display heuristics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Terminals narrower than this start in static mode
    #[serde(default = "default_compact_width")]
    pub compact_width: u16,

    /// Terminals shorter than this start in static mode
    #[serde(default = "default_compact_height")]
    pub compact_height: u16,
}

fn default_compact_width() -> u16 {
    80
}

fn default_compact_height() -> u16 {
    20
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            compact_width: default_compact_width(),
            compact_height: default_compact_height(),
        }
    }
}

impl DisplayConfig {
    /// True if a terminal of this size counts as a small viewport.
    pub fn is_compact(&self, columns: u16, rows: u16) -> bool {
        columns < self.compact_width || rows < self.compact_height
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
            content_path: None,
            boot: BootConfig::default(),
            shell: ShellConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        let config: Config =
            serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Pretty JSON, as printed by `--dump-config`
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::SerializeError(e.to_string()))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !THEME_NAMES.contains(&self.theme.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "theme must be one of {:?}, got '{}'",
                THEME_NAMES, self.theme
            )));
        }

        if self.display.compact_width == 0 {
            return Err(ConfigError::ValidationError(
                "compact_width must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Serialize error: {0}")]
    SerializeError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
}
