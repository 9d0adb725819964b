//! Win32 foreground-window adapter

use async_trait::async_trait;
use windows_sys::Win32::Foundation::HWND;
use windows_sys::Win32::UI::WindowsAndMessaging::{
    GetForegroundWindow, IsWindow, SetForegroundWindow,
};

use crate::application::ports::{FocusError, WindowFocus};
use crate::domain::surface::FocusTarget;

/// Foreground-window adapter using `GetForegroundWindow` / `SetForegroundWindow`
pub struct Win32Focus;

impl Win32Focus {
    /// Create a new Win32 focus adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for Win32Focus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WindowFocus for Win32Focus {
    async fn current(&self) -> Result<Option<FocusTarget>, FocusError> {
        // SAFETY: takes no arguments and only reads window-manager state
        let hwnd = unsafe { GetForegroundWindow() };
        if hwnd.is_null() {
            return Ok(None);
        }
        Ok(Some(FocusTarget::from_raw(hwnd as usize as u64)))
    }

    async fn activate(&self, target: FocusTarget) -> Result<(), FocusError> {
        let hwnd = target.raw() as usize as HWND;

        // SAFETY: IsWindow accepts any value and reports whether it is a live window
        if unsafe { IsWindow(hwnd) } == 0 {
            return Err(FocusError::StaleTarget(target));
        }

        // SAFETY: hwnd was validated above; a window closing in between only makes the call fail
        if unsafe { SetForegroundWindow(hwnd) } == 0 {
            return Err(FocusError::ActivateFailed(format!(
                "SetForegroundWindow refused {}",
                target
            )));
        }

        Ok(())
    }
}
