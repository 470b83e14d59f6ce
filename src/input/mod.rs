pub mod command_registry;
pub mod commands;
pub mod input_history;
pub mod invocation;
#[cfg(feature = "runtime")]
pub mod key_translator;
pub mod line_editor;
