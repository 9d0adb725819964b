//! Shared history handle

use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::error::CapacityError;
use crate::domain::history::{ClipboardSnapshot, HistoryBuffer};

/// Thread-safe handle to the process-wide history buffer.
///
/// The tracker is the only writer; the coordinator and the IPC server read.
/// Locks are never held across an await point.
#[derive(Debug, Clone)]
pub struct SharedHistory {
    inner: Arc<Mutex<HistoryBuffer>>,
}

impl SharedHistory {
    /// Create an empty history with the given capacity
    pub fn new(capacity: usize) -> Result<Self, CapacityError> {
        Ok(Self::from_buffer(HistoryBuffer::new(capacity)?))
    }

    /// Wrap an existing buffer
    pub fn from_buffer(buffer: HistoryBuffer) -> Self {
        Self {
            inner: Arc::new(Mutex::new(buffer)),
        }
    }

    // A poisoned lock still holds a consistent buffer
    fn lock(&self) -> MutexGuard<'_, HistoryBuffer> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Append a snapshot, returning the evicted one if the buffer was full
    pub fn push(&self, snapshot: ClipboardSnapshot) -> Option<ClipboardSnapshot> {
        self.lock().push(snapshot)
    }

    /// Number of stored snapshots
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if no snapshot has been captured yet
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Configured capacity
    pub fn capacity(&self) -> usize {
        self.lock().capacity()
    }

    /// Snapshot at `index`, counting from the most recent (0)
    pub fn get_recent(&self, index: usize) -> Option<ClipboardSnapshot> {
        self.lock().get_recent(index).cloned()
    }

    /// Copy of the history, most recent first
    pub fn recent_first(&self) -> Vec<ClipboardSnapshot> {
        self.lock().recent_first()
    }

    /// Copy of the history in insertion order (oldest first)
    pub fn oldest_first(&self) -> Vec<ClipboardSnapshot> {
        self.lock().iter().cloned().collect()
    }
}
