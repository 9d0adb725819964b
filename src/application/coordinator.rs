//! Paste coordinator use case

use thiserror::Error;
use tokio::time::{sleep, Instant};

use crate::domain::duration::Duration;
use crate::domain::surface::{FocusTarget, InvalidStateTransition, SurfaceSession, SurfaceState};

use super::guard::PasteGuard;
use super::history::SharedHistory;
use super::ports::{
    Clipboard, ClipboardError, DisplaySurface, FocusError, Keystroke, KeystrokeError,
    SurfaceError, WindowFocus,
};

/// How often focus is re-checked while waiting for an activation to land
const FOCUS_CONFIRM_STEP_MS: u64 = 10;

/// Errors from the paste coordinator
#[derive(Debug, Error)]
pub enum PasteError {
    #[error("Clipboard failed: {0}")]
    Clipboard(#[from] ClipboardError),

    #[error("Paste keystroke failed: {0}")]
    Keystroke(#[from] KeystrokeError),

    #[error("Surface failed: {0}")]
    Surface(#[from] SurfaceError),

    #[error("Target window lost, paste aborted: {0}")]
    FocusLost(FocusError),

    #[error("No target window captured, paste aborted")]
    NoTarget,

    #[error("Invalid state transition: {0}")]
    InvalidState(#[from] InvalidStateTransition),
}

/// Configuration for the paste sequence
#[derive(Debug, Clone)]
pub struct PasteConfig {
    /// Pause after hiding the surface and after the paste keystroke
    pub paste_delay: Duration,
    /// Stop before touching the clipboard if the target cannot be reactivated
    pub abort_on_focus_loss: bool,
    /// Raise the paste guard so the tracker ignores the transient payload
    pub ignore_own_paste: bool,
}

impl Default for PasteConfig {
    fn default() -> Self {
        Self {
            paste_delay: Duration::default_paste_delay(),
            abort_on_focus_loss: false,
            ignore_own_paste: true,
        }
    }
}

/// Result of a paste request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasteOutcome {
    /// Nothing was selected; no state was touched
    NothingSelected,
    /// The sequence ran to completion
    Pasted {
        /// Number of characters pasted
        chars: usize,
        /// Whether the captured window was confirmed foreground before the keystroke
        focus_restored: bool,
    },
}

/// Owns the surface state machine and runs the paste-injection sequence.
///
/// Every method takes `&mut self`: the coordinator lives on the single
/// foreground loop, so operations never interleave.
pub struct PasteCoordinator<C, F, K, S>
where
    C: Clipboard,
    F: WindowFocus,
    K: Keystroke,
    S: DisplaySurface,
{
    clipboard: C,
    focus: F,
    keystroke: K,
    surface: S,
    history: SharedHistory,
    guard: PasteGuard,
    session: SurfaceSession,
    config: PasteConfig,
}

impl<C, F, K, S> PasteCoordinator<C, F, K, S>
where
    C: Clipboard,
    F: WindowFocus,
    K: Keystroke,
    S: DisplaySurface,
{
    /// Create a new coordinator in the hidden state
    pub fn new(
        clipboard: C,
        focus: F,
        keystroke: K,
        surface: S,
        history: SharedHistory,
        guard: PasteGuard,
        config: PasteConfig,
    ) -> Self {
        Self {
            clipboard,
            focus,
            keystroke,
            surface,
            history,
            guard,
            session: SurfaceSession::new(),
            config,
        }
    }

    /// Current surface state
    pub fn state(&self) -> SurfaceState {
        self.session.state()
    }

    /// Window captured at the most recent show
    pub fn focus_target(&self) -> Option<FocusTarget> {
        self.session.focus_target()
    }

    /// Show the surface if hidden, hide it if visible
    pub async fn toggle(&mut self) -> Result<SurfaceState, PasteError> {
        if self.session.is_visible() {
            self.request_hide().await?;
        } else {
            self.show().await?;
        }
        Ok(self.state())
    }

    /// Capture the foreground window, render the history and show the surface.
    ///
    /// A failed foreground query captures no target.
    pub async fn show(&mut self) -> Result<(), PasteError> {
        let target = self.focus.current().await.ok().flatten();
        self.session.show(target)?;
        self.refresh().await?;
        self.surface.show().await?;
        Ok(())
    }

    /// Hide the surface. Does nothing when already hidden.
    ///
    /// # Returns
    /// `true` if the surface was visible
    pub async fn request_hide(&mut self) -> Result<bool, PasteError> {
        if !self.session.is_visible() {
            return Ok(false);
        }
        self.session.hide()?;
        self.surface.hide().await?;
        Ok(true)
    }

    /// Re-render the history, most recent first
    pub async fn refresh(&self) -> Result<(), PasteError> {
        self.surface.render(&self.history.recent_first()).await?;
        Ok(())
    }

    /// Select the snippet at `index` (0 = most recent)
    pub fn select(&self, index: usize) -> bool {
        self.surface.select(index)
    }

    /// Paste the surface's current selection into the captured window.
    ///
    /// Only a selection made while the surface is visible counts; a hidden
    /// surface pastes nothing.
    pub async fn paste_selected(&mut self) -> Result<PasteOutcome, PasteError> {
        if !self.session.is_visible() {
            return Ok(PasteOutcome::NothingSelected);
        }
        match self.surface.selection() {
            Some(text) if !text.is_empty() => self.paste_text(&text).await,
            _ => Ok(PasteOutcome::NothingSelected),
        }
    }

    /// Paste history entry `index` (0 = most recent) without going through
    /// the surface selection
    pub async fn paste_recent(&mut self, index: usize) -> Result<PasteOutcome, PasteError> {
        match self.history.get_recent(index) {
            Some(snapshot) => self.paste_text(snapshot.content()).await,
            None => Ok(PasteOutcome::NothingSelected),
        }
    }

    /// Run the paste-injection sequence for `text`.
    ///
    /// hide, settle, reactivate target, save clipboard, write `text`,
    /// paste keystroke, settle, restore clipboard. Once the clipboard has
    /// been saved the restore always runs; the first failure is reported
    /// after it.
    pub async fn paste_text(&mut self, text: &str) -> Result<PasteOutcome, PasteError> {
        self.request_hide().await?;
        sleep(self.config.paste_delay.as_std()).await;

        let focus_restored = match self.session.focus_target() {
            Some(target) => match self.restore_focus(target).await {
                Ok(confirmed) => confirmed,
                Err(e) if self.config.abort_on_focus_loss => return Err(PasteError::FocusLost(e)),
                Err(_) => false,
            },
            None if self.config.abort_on_focus_loss => return Err(PasteError::NoTarget),
            None => false,
        };

        let _token = self.config.ignore_own_paste.then(|| self.guard.begin());

        let original = self
            .clipboard
            .read_text()
            .await
            .ok()
            .flatten()
            .unwrap_or_default();

        let injected = match self.clipboard.write_text(text).await {
            Ok(()) => self.keystroke.send_paste().await.map_err(PasteError::from),
            Err(e) => Err(PasteError::from(e)),
        };

        sleep(self.config.paste_delay.as_std()).await;
        let restored = self.clipboard.write_text(&original).await;

        injected?;
        restored?;

        Ok(PasteOutcome::Pasted {
            chars: text.chars().count(),
            focus_restored,
        })
    }

    /// Activate `target` and wait up to the paste delay for it to become
    /// the foreground window.
    ///
    /// # Returns
    /// `Ok(true)` once confirmed, `Ok(false)` if the platform never reported it
    async fn restore_focus(&self, target: FocusTarget) -> Result<bool, FocusError> {
        self.focus.activate(target).await?;

        let deadline = Instant::now() + self.config.paste_delay.as_std();
        loop {
            if let Ok(Some(current)) = self.focus.current().await {
                if current == target {
                    return Ok(true);
                }
            }
            if Instant::now() >= deadline {
                return Ok(false);
            }
            sleep(std::time::Duration::from_millis(FOCUS_CONFIRM_STEP_MS)).await;
        }
    }
}
