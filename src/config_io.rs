//! Runtime configuration I/O operations.
//!
//! System directory detection and config loading that need runtime
//! dependencies (dirs, tracing). Kept apart from config.rs so the config
//! model builds without them.

use crate::config::{Config, ConfigError};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "termfolio";

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config PATH`
    Explicit(PathBuf),
    /// `{config_dir}/config.json`
    User(PathBuf),
    /// Built-in defaults
    Defaults,
}

impl Config {
    /// Load configuration for a run.
    ///
    /// An explicit path must load cleanly. Otherwise the user config file is
    /// tried, and any problem with it falls back to defaults.
    pub fn resolve(
        explicit: Option<&Path>,
        dirs: &DirectoryContext,
    ) -> Result<(Self, ConfigSource), ConfigError> {
        if let Some(path) = explicit {
            let config = Self::load_from_file(path)?;
            tracing::info!("Loaded config from {}", path.display());
            return Ok((config, ConfigSource::Explicit(path.to_path_buf())));
        }

        let user_path = dirs.config_path();
        if !user_path.exists() {
            tracing::debug!("No config file found, using defaults");
            return Ok((Self::default(), ConfigSource::Defaults));
        }

        match Self::load_from_file(&user_path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", user_path.display());
                Ok((config, ConfigSource::User(user_path)))
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to load config from {}: {}, using defaults",
                    user_path.display(),
                    e
                );
                Ok((Self::default(), ConfigSource::Defaults))
            }
        }
    }

    /// Pick the content document: CLI override, then config, then the
    /// default location if a file exists there.
    pub fn content_path_for(
        &self,
        cli_override: Option<&Path>,
        dirs: &DirectoryContext,
    ) -> Option<PathBuf> {
        if let Some(path) = cli_override {
            return Some(path.to_path_buf());
        }
        if let Some(path) = &self.content_path {
            return Some(path.clone());
        }
        let default = dirs.default_content_path();
        default.exists().then_some(default)
    }
}

/// Directory context for the app's config and state files.
///
/// Only `main` should build this from the system; everything else receives
/// it by parameter so tests can point it at a temp directory.
#[derive(Debug, Clone)]
pub struct DirectoryContext {
    /// Persistent state, e.g. ~/.local/share/termfolio
    pub data_dir: PathBuf,

    /// User configuration, e.g. ~/.config/termfolio
    pub config_dir: PathBuf,
}

impl DirectoryContext {
    /// Create a DirectoryContext from the system directories
    pub fn from_system() -> std::io::Result<Self> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "Could not determine data directory",
                )
            })?
            .join(APP_DIR);

        #[allow(unused_mut)] // mut needed on macOS only
        let mut config_dir = dirs::config_dir()
            .ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "Could not determine config directory",
                )
            })?
            .join(APP_DIR);

        // macOS: prefer ~/.config/termfolio if it exists
        #[cfg(target_os = "macos")]
        if let Some(home) = dirs::home_dir() {
            let xdg_config = home.join(".config").join(APP_DIR);
            if xdg_config.exists() {
                config_dir = xdg_config;
            }
        }

        Ok(Self {
            data_dir,
            config_dir,
        })
    }

    /// All paths point to subdirectories within `temp_dir`
    pub fn for_testing(temp_dir: &Path) -> Self {
        Self {
            data_dir: temp_dir.join("data"),
            config_dir: temp_dir.join("config"),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join("config.json")
    }

    /// Content document looked up when none is configured
    pub fn default_content_path(&self) -> PathBuf {
        self.config_dir.join("content.json")
    }

    /// Persisted mode state
    pub fn state_path(&self) -> PathBuf {
        self.data_dir.join("state.json")
    }
}
