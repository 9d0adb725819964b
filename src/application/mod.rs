//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod coordinator;
pub mod guard;
pub mod history;
pub mod ports;
pub mod tracker;

// Re-export use cases
pub use coordinator::{PasteConfig, PasteCoordinator, PasteError, PasteOutcome};
pub use guard::{PasteGuard, PasteToken};
pub use history::SharedHistory;
pub use tracker::{HistoryObserver, HistoryTracker, PollOutcome};
