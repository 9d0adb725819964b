//! Cross-platform paste accelerator using enigo
//!
//! Works on Windows, macOS, and Linux (X11).

use std::thread;
use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{Keystroke, KeystrokeError};

/// Gap between pressing the modifier and clicking V
const MODIFIER_SETTLE_MS: u64 = 10;

/// Cross-platform keystroke adapter using enigo
pub struct EnigoKeystroke;

impl EnigoKeystroke {
    /// Create a new enigo keystroke adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnigoKeystroke {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Keystroke for EnigoKeystroke {
    async fn send_paste(&self) -> Result<(), KeystrokeError> {
        // enigo operations are blocking, so run in spawn_blocking
        tokio::task::spawn_blocking(|| {
            use enigo::{Direction, Enigo, Key, Keyboard, Settings};

            #[cfg(target_os = "macos")]
            let modifier = Key::Meta;
            #[cfg(not(target_os = "macos"))]
            let modifier = Key::Control;

            let failed = |e: enigo::InputError| KeystrokeError::SendFailed(e.to_string());

            let mut enigo = Enigo::new(&Settings::default()).map_err(|e| {
                KeystrokeError::SendFailed(format!("Failed to create enigo: {}", e))
            })?;

            enigo.key(modifier, Direction::Press).map_err(failed)?;
            thread::sleep(Duration::from_millis(MODIFIER_SETTLE_MS));

            let clicked = enigo.key(Key::Unicode('v'), Direction::Click).map_err(failed);
            // Never leave the modifier held down
            let released = enigo.key(modifier, Direction::Release).map_err(failed);

            clicked.and(released)
        })
        .await
        .map_err(|e| KeystrokeError::SendFailed(format!("Task join error: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keystroke_creates_successfully() {
        let _keystroke = EnigoKeystroke::new();
    }
}
