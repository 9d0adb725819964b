//! Foreground-window infrastructure module
//!
//! Win32 on Windows, xdotool on X11, and a no-op adapter everywhere else.

mod noop;
#[cfg(windows)]
mod windows;
#[cfg(target_os = "linux")]
mod xdotool;

pub use noop::NoOpFocus;
#[cfg(windows)]
pub use windows::Win32Focus;
#[cfg(target_os = "linux")]
pub use xdotool::XdotoolFocus;

#[cfg(target_os = "linux")]
use std::env;
#[cfg(target_os = "linux")]
use std::process::Stdio;

use crate::application::ports::WindowFocus;

/// Check if xdotool can reach an X server
#[cfg(target_os = "linux")]
async fn xdotool_usable() -> bool {
    if env::var_os("DISPLAY").is_none() || env::var_os("WAYLAND_DISPLAY").is_some() {
        return false;
    }

    tokio::process::Command::new("which")
        .arg("xdotool")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Create the foreground-window adapter for the current session.
///
/// Returns the adapter and a short name for status output.
#[allow(unreachable_code)]
pub async fn create_window_focus() -> (Box<dyn WindowFocus>, &'static str) {
    #[cfg(windows)]
    {
        return (Box::new(Win32Focus::new()), "win32");
    }

    #[cfg(target_os = "linux")]
    {
        if xdotool_usable().await {
            return (Box::new(XdotoolFocus::new()), "xdotool");
        }
    }

    (Box::new(NoOpFocus::new()), "none")
}
