//! Display surface port interface

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::history::ClipboardSnapshot;

/// Display surface errors
#[derive(Debug, Clone, Error)]
pub enum SurfaceError {
    #[error("Failed to render history: {0}")]
    RenderFailed(String),

    #[error("Failed to show surface: {0}")]
    ShowFailed(String),
}

/// Callback fired by the surface on user interaction
pub type SurfaceCallback = Arc<dyn Fn() + Send + Sync>;

/// Port for the selection surface.
///
/// The surface keeps the snippets from its last `render` and tracks which
/// one the user has selected.
#[async_trait]
pub trait DisplaySurface: Send + Sync {
    /// Replace the displayed snippets (most recent first)
    async fn render(&self, snippets: &[ClipboardSnapshot]) -> Result<(), SurfaceError>;

    /// Text of the selected snippet, if any
    fn selection(&self) -> Option<String>;

    /// Select the snippet at `index` in the last rendered list.
    ///
    /// # Returns
    /// `false` if `index` is out of range (the selection is left unchanged)
    fn select(&self, index: usize) -> bool;

    /// Make the surface visible and give it focus
    async fn show(&self) -> Result<(), SurfaceError>;

    /// Hide the surface
    async fn hide(&self) -> Result<(), SurfaceError>;

    /// Register the callback fired when the user closes the surface
    fn on_close_requested(&self, _callback: SurfaceCallback) {}

    /// Register the callback fired when the user asks to paste the selection
    fn on_paste_requested(&self, _callback: SurfaceCallback) {}
}

/// Shared surface handle
#[async_trait]
impl<T: DisplaySurface + ?Sized> DisplaySurface for Arc<T> {
    async fn render(&self, snippets: &[ClipboardSnapshot]) -> Result<(), SurfaceError> {
        self.as_ref().render(snippets).await
    }

    fn selection(&self) -> Option<String> {
        self.as_ref().selection()
    }

    fn select(&self, index: usize) -> bool {
        self.as_ref().select(index)
    }

    async fn show(&self) -> Result<(), SurfaceError> {
        self.as_ref().show().await
    }

    async fn hide(&self) -> Result<(), SurfaceError> {
        self.as_ref().hide().await
    }

    fn on_close_requested(&self, callback: SurfaceCallback) {
        self.as_ref().on_close_requested(callback)
    }

    fn on_paste_requested(&self, callback: SurfaceCallback) {
        self.as_ref().on_paste_requested(callback)
    }
}
