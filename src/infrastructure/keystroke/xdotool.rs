//! Xdotool paste accelerator for X11

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{Keystroke, KeystrokeError};

/// Xdotool keystroke adapter
///
/// Uses xdotool which works on X11 systems.
pub struct XdotoolKeystroke;

impl XdotoolKeystroke {
    /// Create a new xdotool keystroke adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for XdotoolKeystroke {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Keystroke for XdotoolKeystroke {
    async fn send_paste(&self) -> Result<(), KeystrokeError> {
        let status = Command::new("xdotool")
            .args(["key", "--clearmodifiers", "ctrl+v"])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    KeystrokeError::ToolNotFound("xdotool".to_string())
                } else {
                    KeystrokeError::SendFailed(e.to_string())
                }
            })?;

        if !status.success() {
            return Err(KeystrokeError::SendFailed(format!(
                "xdotool exited with status: {}",
                status
            )));
        }

        Ok(())
    }
}
