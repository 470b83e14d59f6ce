//! View and UI layer
//!
//! Rendering of the boot log, the shell transcript, the static document and
//! the status bar with ratatui.

pub mod effects;
pub mod render;
pub mod screen;
pub mod status_bar;
pub mod theme;
pub mod wrap;
