//! Hotkey combination value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::HotkeyParseError;

/// Default combination that shows or hides the history surface
pub const DEFAULT_TOGGLE_HOTKEY: &str = "ctrl+grave";

/// Default combination that pastes the selected snippet
pub const DEFAULT_PASTE_HOTKEY: &str = "f9";

/// A single key that can take part in a hotkey.
///
/// Modifiers sort before regular keys so combinations display as
/// `ctrl+shift+v`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    Ctrl,
    Shift,
    Alt,
    Letter(char),
    Digit(u8),
    Function(u8),
    Grave,
    Escape,
    Space,
    Tab,
    Enter,
}

impl Key {
    /// Check if this key is a modifier
    pub const fn is_modifier(&self) -> bool {
        matches!(self, Self::Ctrl | Self::Shift | Self::Alt)
    }

    fn parse(name: &str) -> Option<Self> {
        let key = match name {
            "ctrl" | "control" => Self::Ctrl,
            "shift" => Self::Shift,
            "alt" | "option" => Self::Alt,
            "grave" | "backtick" | "`" => Self::Grave,
            "esc" | "escape" => Self::Escape,
            "space" => Self::Space,
            "tab" => Self::Tab,
            "enter" | "return" => Self::Enter,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_lowercase() => Self::Letter(c),
                    (Some(c), None) if c.is_ascii_digit() => Self::Digit(c as u8 - b'0'),
                    _ => {
                        let n: u8 = name.strip_prefix('f')?.parse().ok()?;
                        if !(1..=12).contains(&n) {
                            return None;
                        }
                        Self::Function(n)
                    }
                }
            }
        };
        Some(key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ctrl => write!(f, "ctrl"),
            Self::Shift => write!(f, "shift"),
            Self::Alt => write!(f, "alt"),
            Self::Letter(c) => write!(f, "{}", c),
            Self::Digit(d) => write!(f, "{}", d),
            Self::Function(n) => write!(f, "f{}", n),
            Self::Grave => write!(f, "grave"),
            Self::Escape => write!(f, "escape"),
            Self::Space => write!(f, "space"),
            Self::Tab => write!(f, "tab"),
            Self::Enter => write!(f, "enter"),
        }
    }
}

/// Set of keys that must be held together to fire a hotkey.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HotkeyCombo {
    keys: Vec<Key>,
}

impl HotkeyCombo {
    /// Keys in canonical order (modifiers first)
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// Check whether every key of the combo is in `pressed`
    pub fn is_held(&self, pressed: &[Key]) -> bool {
        self.keys.iter().all(|k| pressed.contains(k))
    }

    /// Default show/hide combination (Ctrl+`)
    pub fn default_toggle() -> Self {
        Self {
            keys: vec![Key::Ctrl, Key::Grave],
        }
    }

    /// Default paste combination (F9)
    pub fn default_paste() -> Self {
        Self {
            keys: vec![Key::Function(9)],
        }
    }
}

impl FromStr for HotkeyCombo {
    type Err = HotkeyParseError;

    /// Parse a `+`-joined combination such as "ctrl+grave" or "ctrl+shift+v"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = |reason: &str| HotkeyParseError {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let input = s.trim().to_lowercase();
        if input.is_empty() {
            return Err(err("empty combination"));
        }

        let mut keys = Vec::new();
        for part in input.split('+') {
            let part = part.trim();
            if part.is_empty() {
                return Err(err("empty key name"));
            }
            let key = Key::parse(part).ok_or_else(|| err(&format!("unknown key '{}'", part)))?;
            keys.push(key);
        }

        keys.sort();
        keys.dedup();

        if keys.iter().all(Key::is_modifier) {
            return Err(err("a combination needs at least one non-modifier key"));
        }

        Ok(Self { keys })
    }
}

impl fmt::Display for HotkeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.keys.iter().map(Key::to_string).collect();
        write!(f, "{}", names.join("+"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toggle() {
        let combo: HotkeyCombo = DEFAULT_TOGGLE_HOTKEY.parse().unwrap();
        assert_eq!(combo, HotkeyCombo::default_toggle());
        assert_eq!(combo.keys(), &[Key::Ctrl, Key::Grave]);
    }

    #[test]
    fn parse_default_paste() {
        let combo: HotkeyCombo = DEFAULT_PASTE_HOTKEY.parse().unwrap();
        assert_eq!(combo, HotkeyCombo::default_paste());
    }

    #[test]
    fn parse_normalizes_order_and_case() {
        let combo: HotkeyCombo = "V + Shift + CTRL".parse().unwrap();
        assert_eq!(combo.to_string(), "ctrl+shift+v");
    }

    #[test]
    fn parse_aliases() {
        let combo: HotkeyCombo = "control+`".parse().unwrap();
        assert_eq!(combo, HotkeyCombo::default_toggle());
        let combo: HotkeyCombo = "option+esc".parse().unwrap();
        assert_eq!(combo.keys(), &[Key::Alt, Key::Escape]);
    }

    #[test]
    fn parse_digits_and_function_keys() {
        let combo: HotkeyCombo = "alt+1".parse().unwrap();
        assert_eq!(combo.keys(), &[Key::Alt, Key::Digit(1)]);
        let combo: HotkeyCombo = "f12".parse().unwrap();
        assert_eq!(combo.keys(), &[Key::Function(12)]);
    }

    #[test]
    fn parse_rejects_modifier_only() {
        let err = "ctrl+shift".parse::<HotkeyCombo>().unwrap_err();
        assert!(err.reason.contains("non-modifier"));
    }

    #[test]
    fn parse_rejects_unknown_and_empty() {
        assert!("".parse::<HotkeyCombo>().is_err());
        assert!("ctrl++v".parse::<HotkeyCombo>().is_err());
        assert!("ctrl+hyper".parse::<HotkeyCombo>().is_err());
        assert!("f13".parse::<HotkeyCombo>().is_err());
        assert!("f0".parse::<HotkeyCombo>().is_err());
    }

    #[test]
    fn is_held_requires_every_key() {
        let combo = HotkeyCombo::default_toggle();
        assert!(combo.is_held(&[Key::Grave, Key::Ctrl, Key::Shift]));
        assert!(!combo.is_held(&[Key::Grave]));
    }

    #[test]
    fn display_parses_back() {
        let combo: HotkeyCombo = "ctrl+alt+f5".parse().unwrap();
        assert_eq!(combo.to_string().parse::<HotkeyCombo>().unwrap(), combo);
    }
}
