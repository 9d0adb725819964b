//! Global hotkey port interface

use std::sync::Arc;

use thiserror::Error;

use crate::domain::hotkey::HotkeyCombo;

/// Hotkey errors
#[derive(Debug, Clone, Error)]
pub enum HotkeyError {
    #[error("Global hotkeys unavailable: {0}")]
    Unavailable(String),

    #[error("Hotkey {0} is already registered")]
    AlreadyRegistered(HotkeyCombo),
}

/// Callback fired on the listener thread when a combination is pressed
pub type HotkeyCallback = Arc<dyn Fn() + Send + Sync>;

/// Port for the global hotkey service.
///
/// Callbacks run on the service's own thread and must only hand work off
/// (e.g. post into a channel).
pub trait HotkeyService: Send {
    /// Register `callback` for `combo`
    fn register(&mut self, combo: HotkeyCombo, callback: HotkeyCallback)
        -> Result<(), HotkeyError>;

    /// Drop every registration and stop listening
    fn unregister_all(&mut self);
}

impl HotkeyService for Box<dyn HotkeyService> {
    fn register(
        &mut self,
        combo: HotkeyCombo,
        callback: HotkeyCallback,
    ) -> Result<(), HotkeyError> {
        self.as_mut().register(combo, callback)
    }

    fn unregister_all(&mut self) {
        self.as_mut().unregister_all()
    }
}
