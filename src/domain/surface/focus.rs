//! Focus target value object

use std::fmt;

/// Opaque reference to the external window that held input focus
/// right before the history surface was shown.
///
/// The raw value is a platform window handle (an X11 window id, a Win32
/// `HWND`). It is never validated here; the window may have closed by the
/// time it is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FocusTarget {
    raw: u64,
}

impl FocusTarget {
    /// Wrap a raw platform handle
    pub const fn from_raw(raw: u64) -> Self {
        Self { raw }
    }

    /// The raw platform handle
    pub const fn raw(&self) -> u64 {
        self.raw
    }
}

impl fmt::Display for FocusTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_round_trips() {
        assert_eq!(FocusTarget::from_raw(0x3a00007).raw(), 0x3a00007);
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(FocusTarget::from_raw(255).to_string(), "0xff");
    }
}
