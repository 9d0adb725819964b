//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::{AppConfig, LinuxConfig};
use crate::domain::duration::Duration;
use crate::domain::error::ConfigError;
use crate::domain::history::MAX_CAPACITY;
use crate::domain::hotkey::HotkeyCombo;
use crate::infrastructure::{ClipboardBackend, SurfaceKind};

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS, VALID_KEYSTROKE_TOOLS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    ensure_known_key(key)?;

    let mut config = store.load().await?;
    set_value(&mut config, key, value)?;
    store.save(&config).await?;

    presenter.success(&format!("{} = {}", key, value));
    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    ensure_known_key(key)?;

    let config = store.load().await?;
    presenter.output(get_value(&config, key).as_deref().unwrap_or(NOT_SET));
    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;
    for key in VALID_CONFIG_KEYS {
        presenter.key_value(key, get_value(&config, key).as_deref().unwrap_or(NOT_SET));
    }
    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn ensure_known_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        return Ok(());
    }
    Err(ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    })
}

/// Read the stored value of `key` as it would be written in the file
fn get_value(config: &AppConfig, key: &str) -> Option<String> {
    let flag = |b: Option<bool>| b.map(|b| b.to_string());
    match key {
        "capacity" => config.capacity.map(|c| c.to_string()),
        "poll_interval" => config.poll_interval.clone(),
        "paste_delay" => config.paste_delay.clone(),
        "clipboard_timeout" => config.clipboard_timeout.clone(),
        "toggle_hotkey" => config.toggle_hotkey.clone(),
        "paste_hotkey" => config.paste_hotkey.clone(),
        "hotkeys" => flag(config.hotkeys),
        "surface" => config.surface.clone(),
        "clipboard" => config.clipboard.clone(),
        "ignore_own_paste" => flag(config.ignore_own_paste),
        "abort_on_focus_loss" => flag(config.abort_on_focus_loss),
        "linux.keystroke_tool" => config.linux.as_ref().and_then(|l| l.keystroke_tool.clone()),
        _ => None,
    }
}

/// Validate `value` for `key` and store it in normalized form
fn set_value(config: &mut AppConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    let invalid = |message: String| ConfigError::ValidationError {
        key: key.to_string(),
        message,
    };

    match key {
        "capacity" => {
            let capacity = value
                .parse::<usize>()
                .ok()
                .filter(|c| (1..=MAX_CAPACITY).contains(c))
                .ok_or_else(|| {
                    invalid(format!("Value must be a number between 1 and {}", MAX_CAPACITY))
                })?;
            config.capacity = Some(capacity);
        }
        "poll_interval" | "paste_delay" | "clipboard_timeout" => {
            let duration: Duration = value.parse().map_err(|e| invalid(format!("{}", e)))?;
            let normalized = Some(duration.to_string());
            match key {
                "poll_interval" => config.poll_interval = normalized,
                "paste_delay" => config.paste_delay = normalized,
                _ => config.clipboard_timeout = normalized,
            }
        }
        "toggle_hotkey" | "paste_hotkey" => {
            let combo: HotkeyCombo = value.parse().map_err(|e| invalid(format!("{}", e)))?;
            if key == "toggle_hotkey" {
                config.toggle_hotkey = Some(combo.to_string());
            } else {
                config.paste_hotkey = Some(combo.to_string());
            }
        }
        "hotkeys" | "ignore_own_paste" | "abort_on_focus_loss" => {
            let flag = parse_bool(value)
                .map_err(|_| invalid("Value must be 'true' or 'false'".to_string()))?;
            match key {
                "hotkeys" => config.hotkeys = Some(flag),
                "ignore_own_paste" => config.ignore_own_paste = Some(flag),
                _ => config.abort_on_focus_loss = Some(flag),
            }
        }
        "surface" => {
            let kind: SurfaceKind = value.parse().map_err(|e| invalid(format!("{}", e)))?;
            config.surface = Some(kind.to_string());
        }
        "clipboard" => {
            let backend: ClipboardBackend =
                value.parse().map_err(|e| invalid(format!("{}", e)))?;
            config.clipboard = Some(backend.to_string());
        }
        "linux.keystroke_tool" => {
            let lower = value.to_lowercase();
            if !VALID_KEYSTROKE_TOOLS.contains(&lower.as_str()) {
                return Err(invalid(format!(
                    "Invalid value '{}'. Valid options: {}",
                    value,
                    VALID_KEYSTROKE_TOOLS.join(", ")
                )));
            }
            config
                .linux
                .get_or_insert_with(LinuxConfig::default)
                .keystroke_tool = Some(lower);
        }
        _ => return Err(invalid("Unknown key".to_string())),
    }
    Ok(())
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bool_values() {
        assert_eq!(parse_bool("true"), Ok(true));
        assert_eq!(parse_bool("No"), Ok(false));
        assert_eq!(parse_bool("1"), Ok(true));
        assert!(parse_bool("maybe").is_err());
    }

    #[test]
    fn set_capacity_validates_range() {
        let mut config = AppConfig::empty();
        assert!(set_value(&mut config, "capacity", "20").is_ok());
        assert_eq!(config.capacity, Some(20));
        assert!(set_value(&mut config, "capacity", "0").is_err());
        assert!(set_value(&mut config, "capacity", "lots").is_err());
        assert_eq!(config.capacity, Some(20));
    }

    #[test]
    fn set_duration_normalizes() {
        let mut config = AppConfig::empty();
        set_value(&mut config, "poll_interval", "1000ms").unwrap();
        assert_eq!(config.poll_interval.as_deref(), Some("1s"));
        assert!(set_value(&mut config, "paste_delay", "soon").is_err());
    }

    #[test]
    fn set_hotkey_normalizes() {
        let mut config = AppConfig::empty();
        set_value(&mut config, "toggle_hotkey", "V+Ctrl+Shift").unwrap();
        assert_eq!(config.toggle_hotkey.as_deref(), Some("ctrl+shift+v"));
        assert!(set_value(&mut config, "paste_hotkey", "ctrl").is_err());
    }

    #[test]
    fn set_flags() {
        let mut config = AppConfig::empty();
        set_value(&mut config, "hotkeys", "no").unwrap();
        set_value(&mut config, "abort_on_focus_loss", "yes").unwrap();
        assert_eq!(config.hotkeys, Some(false));
        assert_eq!(config.abort_on_focus_loss, Some(true));
        assert!(set_value(&mut config, "ignore_own_paste", "sometimes").is_err());
    }

    #[test]
    fn set_surface_and_clipboard() {
        let mut config = AppConfig::empty();
        set_value(&mut config, "surface", "Notify").unwrap();
        set_value(&mut config, "clipboard", "wl-clipboard").unwrap();
        assert_eq!(config.surface.as_deref(), Some("notification"));
        assert_eq!(config.clipboard.as_deref(), Some("wayland"));
        assert!(set_value(&mut config, "surface", "gtk").is_err());
    }

    #[test]
    fn set_keystroke_tool_creates_linux_section() {
        let mut config = AppConfig::empty();
        set_value(&mut config, "linux.keystroke_tool", "ENIGO").unwrap();
        assert_eq!(get_value(&config, "linux.keystroke_tool").as_deref(), Some("enigo"));
        assert!(set_value(&mut config, "linux.keystroke_tool", "invalid").is_err());
    }

    #[test]
    #[cfg(not(target_os = "linux"))]
    fn linux_only_tools_rejected_elsewhere() {
        let mut config = AppConfig::empty();
        assert!(set_value(&mut config, "linux.keystroke_tool", "xdotool").is_err());
    }

    #[test]
    fn every_key_readable_from_defaults() {
        let config = AppConfig::defaults();
        for key in VALID_CONFIG_KEYS {
            assert!(get_value(&config, key).is_some(), "{} has no default", key);
        }
    }

    #[test]
    fn unknown_key_rejected() {
        assert!(ensure_known_key("api_key").is_err());
        assert!(ensure_known_key("capacity").is_ok());
    }
}
