//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod clipboard;
pub mod config;
pub mod focus;
pub mod hotkey;
pub mod keystroke;
pub mod surface;

// Re-export common types
pub use clipboard::{Clipboard, ClipboardError};
pub use config::ConfigStore;
pub use focus::{FocusError, WindowFocus};
pub use hotkey::{HotkeyCallback, HotkeyError, HotkeyService};
pub use keystroke::{Keystroke, KeystrokeError};
pub use surface::{DisplaySurface, SurfaceCallback, SurfaceError};
