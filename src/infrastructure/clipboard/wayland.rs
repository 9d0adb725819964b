//! Wayland clipboard adapter using wl-paste and wl-copy

use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::application::ports::{Clipboard, ClipboardError};

/// Wayland clipboard adapter using the wl-clipboard tools
pub struct WaylandClipboard;

impl WaylandClipboard {
    /// Create a new Wayland clipboard adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for WaylandClipboard {
    fn default() -> Self {
        Self::new()
    }
}

/// Command for one wl-clipboard tool. The child is killed if the caller
/// stops waiting on it.
fn tool(program: &str) -> Command {
    let mut command = Command::new(program);
    command.stderr(Stdio::null()).kill_on_drop(true);
    command
}

fn spawn_error(e: std::io::Error) -> ClipboardError {
    if e.kind() == std::io::ErrorKind::NotFound {
        ClipboardError::WlClipboardNotFound
    } else {
        ClipboardError::ClipboardUnavailable(e.to_string())
    }
}

#[async_trait]
impl Clipboard for WaylandClipboard {
    async fn read_text(&self) -> Result<Option<String>, ClipboardError> {
        let output = tool("wl-paste")
            .args(["--no-newline", "--type", "text/plain"])
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(spawn_error)?;

        // wl-paste exits non-zero when the clipboard is empty or holds no text
        if !output.status.success() {
            return Ok(None);
        }

        let text = String::from_utf8(output.stdout)
            .map_err(|e| ClipboardError::ReadFailed(e.to_string()))?;

        Ok((!text.is_empty()).then_some(text))
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut child = tool("wl-copy")
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .spawn()
            .map_err(spawn_error)?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .await
                .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;
        }

        let status = child
            .wait()
            .await
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;

        if !status.success() {
            return Err(ClipboardError::WriteFailed(format!(
                "wl-copy exited with status: {}",
                status
            )));
        }

        Ok(())
    }
}
