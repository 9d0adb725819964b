//! Keystroke infrastructure module
//!
//! Sends the paste accelerator through enigo (default) or a native
//! Linux tool.

mod enigo;
mod factory;
mod wtype;
mod xdotool;
mod ydotool;

pub use enigo::EnigoKeystroke;
pub use factory::{
    create_keystroke, detect_keystroke_tool, KeystrokeTool, KeystrokeToolPreference,
    ParseKeystrokeToolError,
};
pub use wtype::WtypeKeystroke;
pub use xdotool::XdotoolKeystroke;
pub use ydotool::YdotoolKeystroke;
