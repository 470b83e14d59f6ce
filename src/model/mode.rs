//! Presentation mode: the interactive shell or the static document.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which of the two top-level presentations is shown.
///
/// Externally (CLI flag, persisted state) the modes are spelled
/// `terminal` and `static`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[serde(rename = "terminal", alias = "interactive")]
    Interactive,
    Static,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Interactive => "terminal",
            Mode::Static => "static",
        }
    }

    /// The other mode.
    pub fn flipped(self) -> Mode {
        match self {
            Mode::Interactive => Mode::Static,
            Mode::Static => Mode::Interactive,
        }
    }

    /// Label for the toggle affordance while this mode is active.
    ///
    /// The label names the mode the toggle switches *to*.
    pub fn toggle_label(self) -> ToggleLabel {
        match self {
            Mode::Interactive => ToggleLabel {
                icon: "▤",
                text: "Static",
            },
            Mode::Static => ToggleLabel {
                icon: ">_",
                text: "Terminal",
            },
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for mode names that are neither `terminal` nor `static`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mode '{0}' (expected 'terminal' or 'static')")]
pub struct UnknownMode(pub String);

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "terminal" | "interactive" | "shell" => Ok(Mode::Interactive),
            "static" => Ok(Mode::Static),
            _ => Err(UnknownMode(s.to_string())),
        }
    }
}

/// Text shown on the mode toggle affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleLabel {
    pub icon: &'static str,
    pub text: &'static str,
}

impl fmt::Display for ToggleLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon, self.text)
    }
}
