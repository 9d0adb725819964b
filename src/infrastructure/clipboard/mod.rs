//! Clipboard infrastructure module
//!
//! Provides cross-platform clipboard support using arboard (primary)
//! or the wl-clipboard tools on Wayland.

mod arboard;
mod bounded;
mod wayland;

pub use arboard::ArboardClipboard;
pub use bounded::BoundedClipboard;
pub use wayland::WaylandClipboard;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::application::ports::Clipboard;
use crate::domain::duration::Duration;

/// Clipboard backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClipboardBackend {
    #[default]
    Arboard,
    /// wl-paste / wl-copy
    Wayland,
}

impl fmt::Display for ClipboardBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arboard => write!(f, "arboard"),
            Self::Wayland => write!(f, "wayland"),
        }
    }
}

/// Error type for parsing a clipboard backend name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid clipboard backend '{0}'. Valid options: arboard, wayland")]
pub struct ParseClipboardBackendError(pub String);

impl FromStr for ClipboardBackend {
    type Err = ParseClipboardBackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "arboard" => Ok(Self::Arboard),
            "wayland" | "wl-clipboard" => Ok(Self::Wayland),
            _ => Err(ParseClipboardBackendError(s.to_string())),
        }
    }
}

/// Create the shared clipboard adapter, every access bounded by `limit`
pub fn create_clipboard(backend: ClipboardBackend, limit: Duration) -> Arc<dyn Clipboard> {
    match backend {
        ClipboardBackend::Arboard => Arc::new(BoundedClipboard::new(ArboardClipboard::new(), limit)),
        ClipboardBackend::Wayland => {
            Arc::new(BoundedClipboard::new(WaylandClipboard::new(), limit))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_parse() {
        assert_eq!("arboard".parse::<ClipboardBackend>().unwrap(), ClipboardBackend::Arboard);
        assert_eq!("Wayland".parse::<ClipboardBackend>().unwrap(), ClipboardBackend::Wayland);
        assert!("xclip".parse::<ClipboardBackend>().is_err());
    }

    #[test]
    fn backend_display_parses_back() {
        for backend in [ClipboardBackend::Arboard, ClipboardBackend::Wayland] {
            assert_eq!(backend.to_string().parse::<ClipboardBackend>().unwrap(), backend);
        }
    }
}
