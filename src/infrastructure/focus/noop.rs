//! No-op foreground-window adapter

use async_trait::async_trait;

use crate::application::ports::{FocusError, WindowFocus};
use crate::domain::surface::FocusTarget;

/// Adapter for platforms without a foreground-window API (Wayland, macOS).
///
/// Never captures a target, so pastes go to whatever window the
/// compositor focuses after the surface hides.
pub struct NoOpFocus;

impl NoOpFocus {
    /// Create a new no-op focus adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpFocus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WindowFocus for NoOpFocus {
    async fn current(&self) -> Result<Option<FocusTarget>, FocusError> {
        Ok(None)
    }

    async fn activate(&self, _target: FocusTarget) -> Result<(), FocusError> {
        Err(FocusError::Unsupported)
    }
}
