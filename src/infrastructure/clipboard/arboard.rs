//! Cross-platform clipboard adapter using arboard
//!
//! Works on Windows, macOS, and Linux (X11/Wayland).

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::application::ports::{Clipboard, ClipboardError};

/// A lazily created value only touched from the blocking pool, one
/// operation at a time.
///
/// Callers queue on a fair async lock, and the owned guard moves into the
/// blocking task. An operation that has started therefore finishes before
/// the next queued one begins, even if its caller stopped waiting. A caller
/// dropped while still queued never runs.
struct BlockingSlot<T> {
    slot: Arc<Mutex<Option<T>>>,
}

impl<T> Clone for BlockingSlot<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<T> Default for BlockingSlot<T> {
    fn default() -> Self {
        Self {
            slot: Arc::new(Mutex::new(None)),
        }
    }
}

impl<T: Send + 'static> BlockingSlot<T> {
    async fn run<R, I, F>(&self, init: I, op: F) -> Result<R, ClipboardError>
    where
        R: Send + 'static,
        I: FnOnce() -> Result<T, ClipboardError> + Send + 'static,
        F: FnOnce(&mut T) -> Result<R, ClipboardError> + Send + 'static,
    {
        let mut slot = Arc::clone(&self.slot).lock_owned().await;

        tokio::task::spawn_blocking(move || {
            if slot.is_none() {
                *slot = Some(init()?);
            }
            match slot.as_mut() {
                Some(value) => op(value),
                None => Err(ClipboardError::ClipboardUnavailable(
                    "clipboard handle missing".to_string(),
                )),
            }
        })
        .await
        .map_err(|e| ClipboardError::ClipboardUnavailable(format!("Task join error: {}", e)))?
    }
}

/// Cross-platform clipboard adapter using arboard.
///
/// One `arboard::Clipboard` is kept for the adapter's lifetime: on X11 the
/// text we set is only served while its owning handle is alive. It is
/// created on first use so construction never fails.
#[derive(Clone, Default)]
pub struct ArboardClipboard {
    handle: BlockingSlot<arboard::Clipboard>,
}

impl ArboardClipboard {
    /// Create a new arboard clipboard adapter
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `op` against the shared handle on the blocking pool
    async fn with_handle<T, F>(&self, op: F) -> Result<T, ClipboardError>
    where
        T: Send + 'static,
        F: FnOnce(&mut arboard::Clipboard) -> Result<T, ClipboardError> + Send + 'static,
    {
        self.handle
            .run(
                || {
                    arboard::Clipboard::new()
                        .map_err(|e| ClipboardError::ClipboardUnavailable(e.to_string()))
                },
                op,
            )
            .await
    }
}

#[async_trait]
impl Clipboard for ArboardClipboard {
    async fn read_text(&self) -> Result<Option<String>, ClipboardError> {
        self.with_handle(|clipboard| match clipboard.get_text() {
            Ok(text) if text.is_empty() => Ok(None),
            Ok(text) => Ok(Some(text)),
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(e) => Err(ClipboardError::ReadFailed(e.to_string())),
        })
        .await
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_owned();
        self.with_handle(move |clipboard| {
            clipboard
                .set_text(text)
                .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
        })
        .await
    }
}
