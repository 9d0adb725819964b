//! CLI argument definitions using Clap

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::duration::Duration;
use crate::domain::hotkey::HotkeyCombo;
use crate::infrastructure::{ClipboardBackend, KeystrokeToolPreference, SurfaceKind};

/// PasteWord - clipboard history you can paste back from
#[derive(Parser, Debug)]
#[command(name = "pasteword")]
#[command(version)]
#[command(about = "Keeps a short clipboard history and pastes old snippets into the last focused window")]
#[command(long_about = None)]
pub struct Cli {
    /// Number of snippets to keep
    #[arg(short = 'n', long, value_name = "N")]
    pub capacity: Option<usize>,

    /// Delay between clipboard polls (e.g., 500ms, 1s)
    #[arg(short = 'i', long, value_name = "TIME")]
    pub poll_interval: Option<String>,

    /// Selection surface
    #[arg(short = 's', long, value_name = "SURFACE")]
    pub surface: Option<SurfaceArg>,

    /// Clipboard backend (arboard, wayland)
    #[arg(long, value_name = "BACKEND")]
    pub clipboard: Option<String>,

    /// Disable global hotkeys (drive the daemon with `pasteword daemon ...`)
    #[arg(long)]
    pub no_hotkeys: bool,

    /// Keystroke tool to use (Linux: enigo, auto, ydotool, xdotool, wtype)
    #[arg(long, value_name = "TOOL")]
    pub keystroke_tool: Option<String>,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Send commands to running daemon
    Daemon {
        #[command(subcommand)]
        action: DaemonAction,
    },
}

/// Daemon control actions
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaemonAction {
    /// Show the history surface if hidden, hide it if visible
    Toggle,
    /// Hide the history surface
    Hide,
    /// Select a snippet (0 = most recent)
    Select {
        /// Snippet index
        index: usize,
    },
    /// Paste the selected snippet, or the snippet at INDEX
    Paste {
        /// Snippet index (0 = most recent)
        index: Option<usize>,
    },
    /// Print the history as JSON, most recent first
    List,
    /// Show surface status (hidden/visible)
    Status,
    /// Stop the daemon
    Quit,
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Surface argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SurfaceArg {
    Console,
    Notification,
}

impl From<SurfaceArg> for SurfaceKind {
    fn from(arg: SurfaceArg) -> Self {
        match arg {
            SurfaceArg::Console => SurfaceKind::Console,
            SurfaceArg::Notification => SurfaceKind::Notification,
        }
    }
}

/// Parsed daemon options
#[derive(Debug, Clone)]
pub struct DaemonOptions {
    pub capacity: usize,
    pub poll_interval: Duration,
    pub paste_delay: Duration,
    pub clipboard_timeout: Duration,
    pub toggle_hotkey: HotkeyCombo,
    pub paste_hotkey: HotkeyCombo,
    pub hotkeys: bool,
    pub surface: SurfaceKind,
    pub clipboard: ClipboardBackend,
    pub keystroke_tool: KeystrokeToolPreference,
    pub ignore_own_paste: bool,
    pub abort_on_focus_loss: bool,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "capacity",
    "poll_interval",
    "paste_delay",
    "clipboard_timeout",
    "toggle_hotkey",
    "paste_hotkey",
    "hotkeys",
    "surface",
    "clipboard",
    "ignore_own_paste",
    "abort_on_focus_loss",
    "linux.keystroke_tool",
];

/// Valid keystroke tool values (platform-aware)
#[cfg(target_os = "linux")]
pub const VALID_KEYSTROKE_TOOLS: &[&str] = &["enigo", "auto", "ydotool", "xdotool", "wtype"];

#[cfg(not(target_os = "linux"))]
pub const VALID_KEYSTROKE_TOOLS: &[&str] = &["enigo"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
