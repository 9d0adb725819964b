//! Paste-in-progress flag shared by the tracker and the coordinator

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Tells the tracker that the coordinator currently owns the clipboard.
///
/// While a [`PasteToken`] is alive the tracker skips its polls, so the
/// transient payload written during a paste never lands in the history.
#[derive(Debug, Clone, Default)]
pub struct PasteGuard {
    active: Arc<AtomicBool>,
}

impl PasteGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a paste as in flight until the returned token is dropped
    pub fn begin(&self) -> PasteToken {
        self.active.store(true, Ordering::SeqCst);
        PasteToken {
            active: Arc::clone(&self.active),
        }
    }

    /// Check if a paste sequence is running
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}

/// Clears the guard on drop
#[derive(Debug)]
pub struct PasteToken {
    active: Arc<AtomicBool>,
}

impl Drop for PasteToken {
    fn drop(&mut self) {
        self.active.store(false, Ordering::SeqCst);
    }
}
