//! Keystroke tool selection

use std::fmt;
use std::str::FromStr;

#[cfg(target_os = "linux")]
use std::env;
#[cfg(target_os = "linux")]
use std::path::Path;
#[cfg(target_os = "linux")]
use std::process::Stdio;

#[cfg(target_os = "linux")]
use tokio::process::Command;

use crate::application::ports::{Keystroke, KeystrokeError};

use super::enigo::EnigoKeystroke;
#[cfg(target_os = "linux")]
use super::wtype::WtypeKeystroke;
#[cfg(target_os = "linux")]
use super::xdotool::XdotoolKeystroke;
#[cfg(target_os = "linux")]
use super::ydotool::YdotoolKeystroke;

/// Available keystroke tools
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeystrokeTool {
    /// Cross-platform enigo library
    Enigo,
    /// Linux: ydotool (requires ydotoold daemon)
    Ydotool,
    /// Linux: wtype (Wayland native)
    Wtype,
    /// Linux: xdotool (X11)
    Xdotool,
}

impl fmt::Display for KeystrokeTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeystrokeTool::Enigo => write!(f, "enigo"),
            KeystrokeTool::Ydotool => write!(f, "ydotool"),
            KeystrokeTool::Wtype => write!(f, "wtype"),
            KeystrokeTool::Xdotool => write!(f, "xdotool"),
        }
    }
}

/// User preference for keystroke tool selection.
///
/// - All platforms support `Enigo` (the default).
/// - Linux additionally supports `Auto`, `Ydotool`, `Xdotool`, and `Wtype`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeystrokeToolPreference {
    #[default]
    Enigo,
    /// Pick a native tool matching the session type (Linux only)
    #[cfg(target_os = "linux")]
    Auto,
    #[cfg(target_os = "linux")]
    Ydotool,
    #[cfg(target_os = "linux")]
    Xdotool,
    #[cfg(target_os = "linux")]
    Wtype,
}

#[cfg(target_os = "linux")]
const VALID_OPTIONS: &str = "enigo, auto, ydotool, xdotool, wtype";
#[cfg(not(target_os = "linux"))]
const VALID_OPTIONS: &str = "enigo";

impl fmt::Display for KeystrokeToolPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeystrokeToolPreference::Enigo => "enigo",
            #[cfg(target_os = "linux")]
            KeystrokeToolPreference::Auto => "auto",
            #[cfg(target_os = "linux")]
            KeystrokeToolPreference::Ydotool => "ydotool",
            #[cfg(target_os = "linux")]
            KeystrokeToolPreference::Xdotool => "xdotool",
            #[cfg(target_os = "linux")]
            KeystrokeToolPreference::Wtype => "wtype",
        };
        write!(f, "{}", name)
    }
}

/// Error type for parsing keystroke tool preference
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid keystroke tool '{value}'. Valid options: {valid_options}")]
pub struct ParseKeystrokeToolError {
    pub value: String,
    pub valid_options: &'static str,
}

impl FromStr for KeystrokeToolPreference {
    type Err = ParseKeystrokeToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "enigo" => Ok(KeystrokeToolPreference::Enigo),
            #[cfg(target_os = "linux")]
            "auto" => Ok(KeystrokeToolPreference::Auto),
            #[cfg(target_os = "linux")]
            "ydotool" => Ok(KeystrokeToolPreference::Ydotool),
            #[cfg(target_os = "linux")]
            "xdotool" => Ok(KeystrokeToolPreference::Xdotool),
            #[cfg(target_os = "linux")]
            "wtype" => Ok(KeystrokeToolPreference::Wtype),
            _ => Err(ParseKeystrokeToolError {
                value: s.to_string(),
                valid_options: VALID_OPTIONS,
            }),
        }
    }
}

/// Check if a tool binary is on PATH using `which`
#[cfg(target_os = "linux")]
async fn is_tool_available(tool: &str) -> bool {
    Command::new("which")
        .arg(tool)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .map(|s| s.success())
        .unwrap_or(false)
}

/// ydotool needs both its binary and a running ydotoold
#[cfg(target_os = "linux")]
async fn is_ydotool_available() -> bool {
    if !is_tool_available("ydotool").await {
        return false;
    }

    let socket_paths = [
        env::var("XDG_RUNTIME_DIR")
            .map(|dir| format!("{}/.ydotool_socket", dir))
            .ok(),
        Some("/tmp/.ydotool_socket".to_string()),
    ];

    socket_paths
        .into_iter()
        .flatten()
        .any(|path| Path::new(&path).exists())
}

#[cfg(target_os = "linux")]
async fn is_available(tool: KeystrokeTool) -> bool {
    match tool {
        KeystrokeTool::Enigo => true,
        KeystrokeTool::Ydotool => is_ydotool_available().await,
        KeystrokeTool::Wtype => is_tool_available("wtype").await,
        KeystrokeTool::Xdotool => is_tool_available("xdotool").await,
    }
}

/// Detect the best available keystroke tool.
///
/// Wayland sessions try wtype then ydotool, X11 sessions try xdotool.
/// Enigo is the fallback everywhere.
pub async fn detect_keystroke_tool() -> KeystrokeTool {
    #[cfg(target_os = "linux")]
    {
        let candidates: &[KeystrokeTool] = if env::var_os("WAYLAND_DISPLAY").is_some() {
            &[KeystrokeTool::Wtype, KeystrokeTool::Ydotool]
        } else {
            &[KeystrokeTool::Xdotool, KeystrokeTool::Ydotool]
        };

        for &tool in candidates {
            if is_available(tool).await {
                return tool;
            }
        }
    }

    KeystrokeTool::Enigo
}

fn instantiate(tool: KeystrokeTool) -> Box<dyn Keystroke> {
    match tool {
        #[cfg(target_os = "linux")]
        KeystrokeTool::Ydotool => Box::new(YdotoolKeystroke::new()),
        #[cfg(target_os = "linux")]
        KeystrokeTool::Wtype => Box::new(WtypeKeystroke::new()),
        #[cfg(target_os = "linux")]
        KeystrokeTool::Xdotool => Box::new(XdotoolKeystroke::new()),
        _ => Box::new(EnigoKeystroke::new()),
    }
}

/// Create a keystroke adapter for `preference`.
///
/// Returns the adapter and the tool it drives. On non-Linux platforms
/// this is always enigo.
pub async fn create_keystroke(
    preference: KeystrokeToolPreference,
) -> Result<(Box<dyn Keystroke>, KeystrokeTool), KeystrokeError> {
    let tool = match preference {
        KeystrokeToolPreference::Enigo => KeystrokeTool::Enigo,
        #[cfg(target_os = "linux")]
        KeystrokeToolPreference::Auto => detect_keystroke_tool().await,
        #[cfg(target_os = "linux")]
        KeystrokeToolPreference::Ydotool => KeystrokeTool::Ydotool,
        #[cfg(target_os = "linux")]
        KeystrokeToolPreference::Xdotool => KeystrokeTool::Xdotool,
        #[cfg(target_os = "linux")]
        KeystrokeToolPreference::Wtype => KeystrokeTool::Wtype,
    };

    #[cfg(target_os = "linux")]
    {
        if !is_available(tool).await {
            return Err(KeystrokeError::ToolNotFound(tool.to_string()));
        }
    }

    Ok((instantiate(tool), tool))
}
