//! No-op hotkey adapter

use crate::application::ports::{HotkeyCallback, HotkeyError, HotkeyService};
use crate::domain::hotkey::HotkeyCombo;

/// Hotkey service that accepts registrations and never fires.
///
/// Used with `--no-hotkeys` and when no display server is reachable; the
/// daemon is then driven through `pasteword daemon ...`.
#[derive(Default)]
pub struct NoOpHotkeys {
    registered: Vec<HotkeyCombo>,
}

impl NoOpHotkeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Combinations registered so far
    pub fn registered(&self) -> &[HotkeyCombo] {
        &self.registered
    }
}

impl HotkeyService for NoOpHotkeys {
    fn register(
        &mut self,
        combo: HotkeyCombo,
        _callback: HotkeyCallback,
    ) -> Result<(), HotkeyError> {
        self.registered.push(combo);
        Ok(())
    }

    fn unregister_all(&mut self) {
        self.registered.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn records_and_clears_registrations() {
        let mut hotkeys = NoOpHotkeys::new();
        hotkeys
            .register(HotkeyCombo::default_paste(), Arc::new(|| {}))
            .unwrap();
        assert_eq!(hotkeys.registered(), &[HotkeyCombo::default_paste()]);

        hotkeys.unregister_all();
        assert!(hotkeys.registered().is_empty());
    }
}
