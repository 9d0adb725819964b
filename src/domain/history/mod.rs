//! Clipboard history value objects

mod buffer;
mod snapshot;

pub use buffer::{HistoryBuffer, DEFAULT_CAPACITY, MAX_CAPACITY};
pub use snapshot::ClipboardSnapshot;
