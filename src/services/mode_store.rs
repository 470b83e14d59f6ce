//! Persistence of the last chosen presentation mode.
//!
//! The state file is a small JSON object; the mode lives under the
//! `portfolioMode` key. Other keys in the file are preserved on write.
//! Read and write failures never reach the user: a store that cannot be read
//! reports "nothing persisted", and a failed write is logged and dropped.

use crate::model::mode::Mode;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Key under which the mode is stored.
pub const MODE_KEY: &str = "portfolioMode";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("serialize error: {0}")]
    Serialize(String),
}

/// Storage for a single persisted [`Mode`].
pub trait ModeStore: std::fmt::Debug {
    /// The persisted mode, if any valid value is stored.
    fn load(&self) -> Option<Mode>;

    /// Persist `mode`. Best effort.
    fn save(&mut self, mode: Mode);
}

/// JSON state file on disk.
#[derive(Debug, Clone)]
pub struct FileModeStore {
    path: PathBuf,
}

impl FileModeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_state(&self) -> Result<Map<String, Value>, StoreError> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let contents = std::fs::read_to_string(&self.path)?;
        match serde_json::from_str::<Value>(&contents) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(StoreError::Parse("state file is not a JSON object".into())),
            Err(e) => Err(StoreError::Parse(e.to_string())),
        }
    }

    /// Read the stored mode, distinguishing failure from absence.
    pub fn try_load(&self) -> Result<Option<Mode>, StoreError> {
        let state = self.read_state()?;
        let Some(value) = state.get(MODE_KEY) else {
            return Ok(None);
        };
        let Some(name) = value.as_str() else {
            return Err(StoreError::Parse(format!("{} is not a string", MODE_KEY)));
        };
        name.parse::<Mode>()
            .map(Some)
            .map_err(|e| StoreError::Parse(e.to_string()))
    }

    /// Write the mode, keeping any other keys already in the file.
    pub fn try_save(&self, mode: Mode) -> Result<(), StoreError> {
        let mut state = self.read_state().unwrap_or_default();
        state.insert(MODE_KEY.to_string(), Value::String(mode.as_str().to_string()));

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&Value::Object(state))
            .map_err(|e| StoreError::Serialize(e.to_string()))?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

impl ModeStore for FileModeStore {
    fn load(&self) -> Option<Mode> {
        match self.try_load() {
            Ok(mode) => mode,
            Err(e) => {
                tracing::warn!(
                    "Ignoring persisted mode in {}: {}",
                    self.path.display(),
                    e
                );
                None
            }
        }
    }

    fn save(&mut self, mode: Mode) {
        match self.try_save(mode) {
            Ok(()) => tracing::debug!("Persisted mode {} to {}", mode, self.path.display()),
            Err(e) => tracing::warn!("Failed to persist mode {}: {}", mode, e),
        }
    }
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryModeStore {
    stored: Option<Mode>,
    writes: usize,
}

impl MemoryModeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: Mode) -> Self {
        Self {
            stored: Some(mode),
            writes: 0,
        }
    }

    /// Number of `save` calls observed.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ModeStore for MemoryModeStore {
    fn load(&self) -> Option<Mode> {
        self.stored
    }

    fn save(&mut self, mode: Mode) {
        self.stored = Some(mode);
        self.writes += 1;
    }
}
