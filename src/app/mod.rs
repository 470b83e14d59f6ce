//! Application layer: the boot sequencer, the shell session, the mode
//! controller and the timed sequences around them.
//!
//! Everything here except `runtime` is terminal-agnostic; it talks to the
//! screen only through the surface traits (`BootSurface`, `ShellHost`,
//! `Presentation`, `HeroSurface`).

pub mod boot_sequencer;
pub mod intro;
pub mod mode_controller;
pub mod session;
pub mod shutdown;
pub mod static_document;
pub mod transcript;

#[cfg(feature = "runtime")]
pub mod runtime;
