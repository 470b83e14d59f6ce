// Portfolio library - exposes all core modules for testing

pub mod app;
pub mod config;
#[cfg(feature = "runtime")]
pub mod config_io;
pub mod content;
pub mod input;
pub mod model;
pub mod services;
#[cfg(feature = "runtime")]
pub mod view;
