//! Hotkey value objects

mod combo;

pub use combo::{HotkeyCombo, Key, DEFAULT_PASTE_HOTKEY, DEFAULT_TOGGLE_HOTKEY};
