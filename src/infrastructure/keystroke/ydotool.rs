//! Ydotool paste accelerator for Wayland

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{Keystroke, KeystrokeError};

/// Linux input event codes: KEY_LEFTCTRL down, KEY_V down, KEY_V up, KEY_LEFTCTRL up
const CTRL_V_SEQUENCE: [&str; 4] = ["29:1", "47:1", "47:0", "29:0"];

/// Ydotool keystroke adapter
///
/// Requires ydotoold daemon to be running and user to be in the input group.
pub struct YdotoolKeystroke;

impl YdotoolKeystroke {
    /// Create a new ydotool keystroke adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for YdotoolKeystroke {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Keystroke for YdotoolKeystroke {
    async fn send_paste(&self) -> Result<(), KeystrokeError> {
        let status = Command::new("ydotool")
            .arg("key")
            .args(CTRL_V_SEQUENCE)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    KeystrokeError::ToolNotFound("ydotool".to_string())
                } else {
                    KeystrokeError::SendFailed(e.to_string())
                }
            })?;

        if !status.success() {
            return Err(KeystrokeError::SendFailed(format!(
                "ydotool exited with status: {}",
                status
            )));
        }

        Ok(())
    }
}
