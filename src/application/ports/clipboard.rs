//! Clipboard port interface

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

/// Clipboard errors
#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    #[error("wl-paste/wl-copy not found. Please install wl-clipboard.")]
    WlClipboardNotFound,

    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    #[error("Failed to read clipboard: {0}")]
    ReadFailed(String),

    #[error("Failed to write clipboard: {0}")]
    WriteFailed(String),

    #[error("Clipboard access timed out after {0}ms")]
    TimedOut(u64),
}

/// Port for the system clipboard.
///
/// Every call is one scoped access: acquire, read or write once, release.
/// Implementations must not hold the clipboard between calls.
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Read the current text payload.
    ///
    /// # Returns
    /// `Ok(None)` when the clipboard is empty or holds no text
    async fn read_text(&self) -> Result<Option<String>, ClipboardError>;

    /// Replace the clipboard payload with `text`.
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Blanket implementation for boxed clipboard types
#[async_trait]
impl Clipboard for Box<dyn Clipboard> {
    async fn read_text(&self) -> Result<Option<String>, ClipboardError> {
        self.as_ref().read_text().await
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.as_ref().write_text(text).await
    }
}

/// Shared clipboard handle used by both the tracker and the coordinator
#[async_trait]
impl<T: Clipboard + ?Sized> Clipboard for Arc<T> {
    async fn read_text(&self) -> Result<Option<String>, ClipboardError> {
        self.as_ref().read_text().await
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.as_ref().write_text(text).await
    }
}
