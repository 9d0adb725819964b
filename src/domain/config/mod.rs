//! Configuration value objects

mod app_config;

pub use app_config::{AppConfig, LinuxConfig, DEFAULT_CLIPBOARD_BACKEND, DEFAULT_KEYSTROKE_TOOL, DEFAULT_SURFACE};
