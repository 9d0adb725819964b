//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod duration;
pub mod error;
pub mod history;
pub mod hotkey;
pub mod surface;

// Re-export common types
pub use config::AppConfig;
pub use duration::Duration;
pub use error::*;
pub use history::{ClipboardSnapshot, HistoryBuffer};
pub use hotkey::{HotkeyCombo, Key};
pub use surface::{FocusTarget, SurfaceSession, SurfaceState};
