//! Wtype paste accelerator for Wayland

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{Keystroke, KeystrokeError};

/// Wtype keystroke adapter
///
/// Presses Ctrl, taps V, releases Ctrl through the virtual-keyboard protocol.
pub struct WtypeKeystroke;

impl WtypeKeystroke {
    /// Create a new wtype keystroke adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for WtypeKeystroke {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Keystroke for WtypeKeystroke {
    async fn send_paste(&self) -> Result<(), KeystrokeError> {
        let status = Command::new("wtype")
            .args(["-M", "ctrl", "-k", "v", "-m", "ctrl"])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    KeystrokeError::ToolNotFound("wtype".to_string())
                } else {
                    KeystrokeError::SendFailed(e.to_string())
                }
            })?;

        if !status.success() {
            return Err(KeystrokeError::SendFailed(format!(
                "wtype exited with status: {}",
                status
            )));
        }

        Ok(())
    }
}
