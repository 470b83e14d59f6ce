//! Core data model shared by the shell, the boot sequencer and the views.

pub mod boot_transcript;
pub mod markup;
pub mod mode;
