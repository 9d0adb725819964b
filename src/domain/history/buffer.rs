//! Bounded FIFO history of clipboard snapshots

use std::collections::VecDeque;

use super::snapshot::ClipboardSnapshot;
use crate::domain::error::CapacityError;

/// Default number of snapshots kept
pub const DEFAULT_CAPACITY: usize = 10;

/// Upper bound accepted for a configured capacity
pub const MAX_CAPACITY: usize = 1_000;

/// Ordered, bounded sequence of snapshots.
///
/// Entries are kept in insertion order (oldest first). Appending at
/// capacity evicts the oldest entry, so `len() <= capacity()` always holds.
/// Duplicate detection is not the buffer's concern: the tracker decides
/// what gets appended.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    entries: VecDeque<ClipboardSnapshot>,
    capacity: usize,
}

impl HistoryBuffer {
    /// Create an empty buffer with the given capacity
    pub fn new(capacity: usize) -> Result<Self, CapacityError> {
        if capacity == 0 || capacity > MAX_CAPACITY {
            return Err(CapacityError {
                value: capacity,
                max: MAX_CAPACITY,
            });
        }

        Ok(Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    /// Append a snapshot, evicting the oldest one when full.
    ///
    /// Returns the evicted snapshot, if any.
    pub fn push(&mut self, snapshot: ClipboardSnapshot) -> Option<ClipboardSnapshot> {
        let evicted = if self.entries.len() == self.capacity {
            self.entries.pop_front()
        } else {
            None
        };
        self.entries.push_back(snapshot);
        evicted
    }

    /// Maximum number of entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the buffer holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recently appended snapshot
    pub fn latest(&self) -> Option<&ClipboardSnapshot> {
        self.entries.back()
    }

    /// Entry by display position (0 = most recent)
    pub fn get_recent(&self, index: usize) -> Option<&ClipboardSnapshot> {
        self.entries.iter().rev().nth(index)
    }

    /// Iterate in insertion order (oldest first)
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &ClipboardSnapshot> {
        self.entries.iter()
    }

    /// Copy of the entries in display order (most recent first)
    pub fn recent_first(&self) -> Vec<ClipboardSnapshot> {
        self.entries.iter().rev().cloned().collect()
    }
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self {
            entries: VecDeque::with_capacity(DEFAULT_CAPACITY),
            capacity: DEFAULT_CAPACITY,
        }
    }
}
