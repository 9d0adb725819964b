//! Xdotool foreground-window adapter for X11

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{FocusError, WindowFocus};
use crate::domain::surface::FocusTarget;

/// Foreground-window adapter driving `xdotool getactivewindow` / `windowactivate`
pub struct XdotoolFocus;

impl XdotoolFocus {
    /// Create a new xdotool focus adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for XdotoolFocus {
    fn default() -> Self {
        Self::new()
    }
}

fn spawn_error(e: std::io::Error) -> FocusError {
    if e.kind() == std::io::ErrorKind::NotFound {
        FocusError::XdotoolNotFound
    } else {
        FocusError::QueryFailed(e.to_string())
    }
}

/// Parse the decimal window id printed by `xdotool getactivewindow`
fn parse_window_id(stdout: &str) -> Option<FocusTarget> {
    stdout
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|&id| id != 0)
        .map(FocusTarget::from_raw)
}

#[async_trait]
impl WindowFocus for XdotoolFocus {
    async fn current(&self) -> Result<Option<FocusTarget>, FocusError> {
        let output = Command::new("xdotool")
            .arg("getactivewindow")
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await
            .map_err(spawn_error)?;

        // Exits non-zero when nothing has focus (e.g. the root window)
        if !output.status.success() {
            return Ok(None);
        }

        Ok(parse_window_id(&String::from_utf8_lossy(&output.stdout)))
    }

    async fn activate(&self, target: FocusTarget) -> Result<(), FocusError> {
        let status = Command::new("xdotool")
            .args(["windowactivate", &target.raw().to_string()])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| match spawn_error(e) {
                FocusError::QueryFailed(msg) => FocusError::ActivateFailed(msg),
                other => other,
            })?;

        // BadWindow: the captured window has been destroyed
        if !status.success() {
            return Err(FocusError::StaleTarget(target));
        }

        Ok(())
    }
}
