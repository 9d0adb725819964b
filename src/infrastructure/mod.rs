//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the system clipboard, window manager, keyboard
//! and desktop notifications.

pub mod clipboard;
pub mod config;
pub mod focus;
pub mod hotkey;
pub mod keystroke;
pub mod surface;

// Re-export adapters
pub use clipboard::{create_clipboard, ArboardClipboard, ClipboardBackend, WaylandClipboard};
pub use config::XdgConfigStore;
pub use focus::{create_window_focus, NoOpFocus};
pub use hotkey::{DeviceQueryHotkeys, NoOpHotkeys};
pub use keystroke::{create_keystroke, KeystrokeTool, KeystrokeToolPreference};
pub use surface::{ConsoleSurface, NotificationSurface, SurfaceKind};
