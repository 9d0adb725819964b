//! Configuration loading and daemon option resolution

use std::env;
use std::str::FromStr;

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::history::MAX_CAPACITY;
use crate::infrastructure::XdgConfigStore;

use super::args::DaemonOptions;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment overrides
pub const ENV_CAPACITY: &str = "PASTEWORD_CAPACITY";
pub const ENV_POLL_INTERVAL: &str = "PASTEWORD_POLL_INTERVAL";

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> Result<AppConfig, String> {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.map_err(|e| e.to_string())?;
    let env_config = env_config()?;

    // Merge: defaults < file < env < cli
    Ok(AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config))
}

fn env_config() -> Result<AppConfig, String> {
    let var = |name: &str| env::var(name).ok().filter(|s| !s.trim().is_empty());

    let capacity = var(ENV_CAPACITY)
        .map(|raw| {
            raw.trim()
                .parse::<usize>()
                .map_err(|_| format!("Invalid {}: \"{}\"", ENV_CAPACITY, raw))
        })
        .transpose()?;

    Ok(AppConfig {
        capacity,
        poll_interval: var(ENV_POLL_INTERVAL),
        ..Default::default()
    })
}

/// Resolve merged configuration into daemon options.
///
/// Unlike the `*_or_default` accessors, a present but malformed value is
/// an error here so a typo on the command line is reported.
pub fn daemon_options(config: &AppConfig) -> Result<DaemonOptions, String> {
    let capacity = config.capacity_or_default();
    if capacity == 0 || capacity > MAX_CAPACITY {
        return Err(format!(
            "Invalid capacity: {}. Capacity must be between 1 and {}",
            capacity, MAX_CAPACITY
        ));
    }

    Ok(DaemonOptions {
        capacity,
        poll_interval: parse_field("poll-interval", config.poll_interval.as_deref())?
            .unwrap_or_else(|| config.poll_interval_or_default()),
        paste_delay: parse_field("paste_delay", config.paste_delay.as_deref())?
            .unwrap_or_else(|| config.paste_delay_or_default()),
        clipboard_timeout: parse_field("clipboard_timeout", config.clipboard_timeout.as_deref())?
            .unwrap_or_else(|| config.clipboard_timeout_or_default()),
        toggle_hotkey: parse_field("toggle_hotkey", config.toggle_hotkey.as_deref())?
            .unwrap_or_else(|| config.toggle_hotkey_or_default()),
        paste_hotkey: parse_field("paste_hotkey", config.paste_hotkey.as_deref())?
            .unwrap_or_else(|| config.paste_hotkey_or_default()),
        hotkeys: config.hotkeys_or_default(),
        surface: parse_value("surface", config.surface_or_default())?,
        clipboard: parse_value("clipboard", config.clipboard_or_default())?,
        keystroke_tool: parse_value("keystroke-tool", config.keystroke_tool_or_default())?,
        ignore_own_paste: config.ignore_own_paste_or_default(),
        abort_on_focus_loss: config.abort_on_focus_loss_or_default(),
    })
}

fn parse_field<T>(name: &str, raw: Option<&str>) -> Result<Option<T>, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.map(|raw| parse_value(name, raw)).transpose()
}

fn parse_value<T>(name: &str, raw: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse()
        .map_err(|e| format!("Invalid {}: {}", name, e))
}
