//! PasteWord - clipboard history daemon
//!
//! Watches the system clipboard, keeps a bounded history of copied text
//! and pastes a chosen snippet back into the window that had focus,
//! leaving the clipboard as it found it.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Value objects (snapshots, history buffer, hotkeys, durations), surface state and errors
//! - **Application**: The history tracker and paste coordinator plus port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (arboard, wl-clipboard, enigo, xdotool, device_query, etc.)
//! - **CLI**: Command-line interface, daemon IPC and signal handling

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
