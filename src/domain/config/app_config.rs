//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::duration::Duration;
use crate::domain::history::DEFAULT_CAPACITY;
use crate::domain::hotkey::{HotkeyCombo, DEFAULT_PASTE_HOTKEY, DEFAULT_TOGGLE_HOTKEY};

/// Default display surface name
pub const DEFAULT_SURFACE: &str = "console";

/// Default clipboard backend name
pub const DEFAULT_CLIPBOARD_BACKEND: &str = "arboard";

/// Default keystroke tool name
pub const DEFAULT_KEYSTROKE_TOOL: &str = "enigo";

/// Linux-specific configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinuxConfig {
    pub keystroke_tool: Option<String>,
}

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub capacity: Option<usize>,
    pub poll_interval: Option<String>,
    pub paste_delay: Option<String>,
    pub clipboard_timeout: Option<String>,
    pub toggle_hotkey: Option<String>,
    pub paste_hotkey: Option<String>,
    pub hotkeys: Option<bool>,
    pub surface: Option<String>,
    pub clipboard: Option<String>,
    pub ignore_own_paste: Option<bool>,
    pub abort_on_focus_loss: Option<bool>,
    pub linux: Option<LinuxConfig>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            capacity: Some(DEFAULT_CAPACITY),
            poll_interval: Some(Duration::default_poll_interval().to_string()),
            paste_delay: Some(Duration::default_paste_delay().to_string()),
            clipboard_timeout: Some(Duration::default_clipboard_timeout().to_string()),
            toggle_hotkey: Some(DEFAULT_TOGGLE_HOTKEY.to_string()),
            paste_hotkey: Some(DEFAULT_PASTE_HOTKEY.to_string()),
            hotkeys: Some(true),
            surface: Some(DEFAULT_SURFACE.to_string()),
            clipboard: Some(DEFAULT_CLIPBOARD_BACKEND.to_string()),
            ignore_own_paste: Some(true),
            abort_on_focus_loss: Some(false),
            linux: Some(LinuxConfig {
                keystroke_tool: Some(DEFAULT_KEYSTROKE_TOOL.to_string()),
            }),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            capacity: other.capacity.or(self.capacity),
            poll_interval: other.poll_interval.or(self.poll_interval),
            paste_delay: other.paste_delay.or(self.paste_delay),
            clipboard_timeout: other.clipboard_timeout.or(self.clipboard_timeout),
            toggle_hotkey: other.toggle_hotkey.or(self.toggle_hotkey),
            paste_hotkey: other.paste_hotkey.or(self.paste_hotkey),
            hotkeys: other.hotkeys.or(self.hotkeys),
            surface: other.surface.or(self.surface),
            clipboard: other.clipboard.or(self.clipboard),
            ignore_own_paste: other.ignore_own_paste.or(self.ignore_own_paste),
            abort_on_focus_loss: other.abort_on_focus_loss.or(self.abort_on_focus_loss),
            linux: Self::merge_linux_config(self.linux, other.linux),
        }
    }

    /// Merge Linux config sections
    fn merge_linux_config(
        base: Option<LinuxConfig>,
        other: Option<LinuxConfig>,
    ) -> Option<LinuxConfig> {
        match (base, other) {
            (None, None) => None,
            (Some(b), None) => Some(b),
            (None, Some(o)) => Some(o),
            (Some(b), Some(o)) => Some(LinuxConfig {
                keystroke_tool: o.keystroke_tool.or(b.keystroke_tool),
            }),
        }
    }

    /// Get capacity, or the default if not set
    pub fn capacity_or_default(&self) -> usize {
        self.capacity.unwrap_or(DEFAULT_CAPACITY)
    }

    /// Get poll interval as parsed Duration, or default if not set/invalid
    pub fn poll_interval_or_default(&self) -> Duration {
        self.poll_interval
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(Duration::default_poll_interval)
    }

    /// Get paste delay as parsed Duration, or default if not set/invalid
    pub fn paste_delay_or_default(&self) -> Duration {
        self.paste_delay
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(Duration::default_paste_delay)
    }

    /// Get clipboard timeout as parsed Duration, or default if not set/invalid
    pub fn clipboard_timeout_or_default(&self) -> Duration {
        self.clipboard_timeout
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(Duration::default_clipboard_timeout)
    }

    /// Get toggle hotkey as parsed combo, or default if not set/invalid
    pub fn toggle_hotkey_or_default(&self) -> HotkeyCombo {
        self.toggle_hotkey
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(HotkeyCombo::default_toggle)
    }

    /// Get paste hotkey as parsed combo, or default if not set/invalid
    pub fn paste_hotkey_or_default(&self) -> HotkeyCombo {
        self.paste_hotkey
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(HotkeyCombo::default_paste)
    }

    /// Get hotkeys setting, or true if not set
    pub fn hotkeys_or_default(&self) -> bool {
        self.hotkeys.unwrap_or(true)
    }

    /// Get surface name, or "console" if not set
    pub fn surface_or_default(&self) -> &str {
        self.surface.as_deref().unwrap_or(DEFAULT_SURFACE)
    }

    /// Get clipboard backend name, or "arboard" if not set
    pub fn clipboard_or_default(&self) -> &str {
        self.clipboard.as_deref().unwrap_or(DEFAULT_CLIPBOARD_BACKEND)
    }

    /// Get ignore_own_paste setting, or true if not set
    pub fn ignore_own_paste_or_default(&self) -> bool {
        self.ignore_own_paste.unwrap_or(true)
    }

    /// Get abort_on_focus_loss setting, or false if not set
    pub fn abort_on_focus_loss_or_default(&self) -> bool {
        self.abort_on_focus_loss.unwrap_or(false)
    }

    /// Get keystroke tool preference, or "enigo" if not set
    pub fn keystroke_tool_or_default(&self) -> &str {
        self.linux
            .as_ref()
            .and_then(|l| l.keystroke_tool.as_deref())
            .unwrap_or(DEFAULT_KEYSTROKE_TOOL)
    }
}
