//! Surface visibility state machine

use std::fmt;
use thiserror::Error;

use super::focus::FocusTarget;

/// Visibility of the history surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SurfaceState {
    #[default]
    Hidden,
    Visible,
}

impl SurfaceState {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hidden => "hidden",
            Self::Visible => "visible",
        }
    }
}

impl fmt::Display for SurfaceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when an invalid state transition is attempted
#[derive(Debug, Clone, Error)]
#[error("Invalid state transition: cannot {action} while {current_state}")]
pub struct InvalidStateTransition {
    pub current_state: SurfaceState,
    pub action: String,
}

/// Surface session entity.
///
/// State machine:
///   HIDDEN -> VISIBLE (show, captures the focus target)
///   VISIBLE -> HIDDEN (hide, keeps the focus target)
///
/// The focus target survives `hide` so the paste that immediately follows
/// can return to it; the next `show` replaces it.
#[derive(Debug, Default)]
pub struct SurfaceSession {
    state: SurfaceState,
    focus_target: Option<FocusTarget>,
}

impl SurfaceSession {
    /// Create a new session in hidden state with no focus target
    pub fn new() -> Self {
        Self {
            state: SurfaceState::Hidden,
            focus_target: None,
        }
    }

    /// Get the current state
    pub fn state(&self) -> SurfaceState {
        self.state
    }

    /// Check if the surface is visible
    pub fn is_visible(&self) -> bool {
        self.state == SurfaceState::Visible
    }

    /// Window captured at the most recent `show`
    pub fn focus_target(&self) -> Option<FocusTarget> {
        self.focus_target
    }

    /// Transition from HIDDEN to VISIBLE, capturing `target`
    pub fn show(&mut self, target: Option<FocusTarget>) -> Result<(), InvalidStateTransition> {
        if self.state != SurfaceState::Hidden {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "show surface".to_string(),
            });
        }
        self.state = SurfaceState::Visible;
        self.focus_target = target;
        Ok(())
    }

    /// Transition from VISIBLE to HIDDEN
    pub fn hide(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != SurfaceState::Visible {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "hide surface".to_string(),
            });
        }
        self.state = SurfaceState::Hidden;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_hidden_without_target() {
        let session = SurfaceSession::new();
        assert_eq!(session.state(), SurfaceState::Hidden);
        assert!(session.focus_target().is_none());
    }

    #[test]
    fn show_captures_target() {
        let mut session = SurfaceSession::new();
        session.show(Some(FocusTarget::from_raw(7))).unwrap();
        assert!(session.is_visible());
        assert_eq!(session.focus_target(), Some(FocusTarget::from_raw(7)));
    }

    #[test]
    fn hide_keeps_target() {
        let mut session = SurfaceSession::new();
        session.show(Some(FocusTarget::from_raw(7))).unwrap();
        session.hide().unwrap();
        assert!(!session.is_visible());
        assert_eq!(session.focus_target(), Some(FocusTarget::from_raw(7)));
    }

    #[test]
    fn second_show_replaces_target() {
        let mut session = SurfaceSession::new();
        session.show(Some(FocusTarget::from_raw(1))).unwrap();
        session.hide().unwrap();
        session.show(Some(FocusTarget::from_raw(2))).unwrap();
        assert_eq!(session.focus_target(), Some(FocusTarget::from_raw(2)));
    }

    #[test]
    fn show_without_foreground_window_clears_target() {
        let mut session = SurfaceSession::new();
        session.show(Some(FocusTarget::from_raw(1))).unwrap();
        session.hide().unwrap();
        session.show(None).unwrap();
        assert!(session.focus_target().is_none());
    }

    #[test]
    fn show_while_visible_fails() {
        let mut session = SurfaceSession::new();
        session.show(None).unwrap();
        let err = session.show(None).unwrap_err();
        assert_eq!(err.current_state, SurfaceState::Visible);
        assert!(err.action.contains("show"));
    }

    #[test]
    fn hide_while_hidden_fails() {
        let mut session = SurfaceSession::new();
        let err = session.hide().unwrap_err();
        assert_eq!(err.current_state, SurfaceState::Hidden);
    }

    #[test]
    fn state_display() {
        assert_eq!(SurfaceState::Hidden.to_string(), "hidden");
        assert_eq!(SurfaceState::Visible.to_string(), "visible");
    }

    #[test]
    fn error_display() {
        let err = InvalidStateTransition {
            current_state: SurfaceState::Hidden,
            action: "hide surface".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("hide surface"));
        assert!(msg.contains("hidden"));
    }
}
