//! Foreground-window port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::surface::FocusTarget;

/// Foreground-window errors
#[derive(Debug, Clone, Error)]
pub enum FocusError {
    #[error("xdotool not found. Please install xdotool.")]
    XdotoolNotFound,

    #[error("Window focus is not supported on this platform")]
    Unsupported,

    #[error("Window {0} no longer exists")]
    StaleTarget(FocusTarget),

    #[error("Failed to query foreground window: {0}")]
    QueryFailed(String),

    #[error("Failed to activate window: {0}")]
    ActivateFailed(String),
}

/// Port for the platform foreground-window service
#[async_trait]
pub trait WindowFocus: Send + Sync {
    /// Get the window that currently holds input focus.
    ///
    /// # Returns
    /// `Ok(None)` when no window is focused or the platform cannot tell
    async fn current(&self) -> Result<Option<FocusTarget>, FocusError>;

    /// Bring `target` back to the foreground.
    async fn activate(&self, target: FocusTarget) -> Result<(), FocusError>;
}

/// Blanket implementation for boxed focus types
#[async_trait]
impl WindowFocus for Box<dyn WindowFocus> {
    async fn current(&self) -> Result<Option<FocusTarget>, FocusError> {
        self.as_ref().current().await
    }

    async fn activate(&self, target: FocusTarget) -> Result<(), FocusError> {
        self.as_ref().activate(target).await
    }
}
