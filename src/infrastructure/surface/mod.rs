//! Selection surface infrastructure module
//!
//! A numbered list in the daemon's terminal (default) or a desktop
//! notification.

mod console;
mod list;
mod notification;

pub use console::{ConsoleInput, ConsoleSurface};
pub use notification::NotificationSurface;

use std::fmt;
use std::str::FromStr;

/// Available selection surfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SurfaceKind {
    #[default]
    Console,
    Notification,
}

impl fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceKind::Console => write!(f, "console"),
            SurfaceKind::Notification => write!(f, "notification"),
        }
    }
}

/// Error type for parsing a surface name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid surface '{0}'. Valid options: console, notification")]
pub struct ParseSurfaceKindError(pub String);

impl FromStr for SurfaceKind {
    type Err = ParseSurfaceKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "console" => Ok(SurfaceKind::Console),
            "notification" | "notify" => Ok(SurfaceKind::Notification),
            _ => Err(ParseSurfaceKindError(s.to_string())),
        }
    }
}
