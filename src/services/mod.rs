pub mod effects;
pub mod mode_store;
pub mod time_source;
pub mod variant_picker;

#[cfg(feature = "runtime")]
pub mod log_dirs;
#[cfg(feature = "runtime")]
pub mod terminal_modes;
#[cfg(feature = "runtime")]
pub mod tracing_setup;
