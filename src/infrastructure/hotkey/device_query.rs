//! Global hotkeys by polling keyboard state with device_query
//!
//! Polling avoids OS event hooks, which need a main-thread run loop on
//! macOS and grabs on X11. A 30ms period catches any human key press.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::sync_channel;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use device_query::{DeviceQuery, DeviceState, Keycode};

use crate::application::ports::{HotkeyCallback, HotkeyError, HotkeyService};
use crate::domain::hotkey::{HotkeyCombo, Key};

/// Polling interval for key state
const POLL_INTERVAL: Duration = Duration::from_millis(30);

type Bindings = Arc<Mutex<Vec<(HotkeyCombo, HotkeyCallback)>>>;

/// Translate a device_query keycode into a hotkey key
fn map_keycode(keycode: &Keycode) -> Option<Key> {
    match keycode {
        Keycode::LControl | Keycode::RControl => return Some(Key::Ctrl),
        Keycode::LShift | Keycode::RShift => return Some(Key::Shift),
        Keycode::LAlt | Keycode::RAlt => return Some(Key::Alt),
        Keycode::Grave => return Some(Key::Grave),
        Keycode::Escape => return Some(Key::Escape),
        Keycode::Space => return Some(Key::Space),
        Keycode::Tab => return Some(Key::Tab),
        Keycode::Enter => return Some(Key::Enter),
        _ => {}
    }

    // Letters are `A`..`Z`, digits `Key0`..`Key9`, function keys `F1`..`F12`
    let name = format!("{:?}", keycode);
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_uppercase() => Some(Key::Letter(c.to_ascii_lowercase())),
        _ => {
            if let Some(digit) = name.strip_prefix("Key") {
                return digit.parse().ok().filter(|d| *d <= 9).map(Key::Digit);
            }
            name.strip_prefix('F')?
                .parse()
                .ok()
                .filter(|n| (1..=12).contains(n))
                .map(Key::Function)
        }
    }
}

#[cfg(target_os = "linux")]
fn open_device_state() -> Option<DeviceState> {
    DeviceState::checked_new()
}

#[cfg(not(target_os = "linux"))]
fn open_device_state() -> Option<DeviceState> {
    Some(DeviceState::new())
}

/// Global hotkey service backed by a key-state polling thread.
///
/// The thread starts on the first registration and fires each callback
/// once per press (rising edge of the whole combination).
pub struct DeviceQueryHotkeys {
    bindings: Bindings,
    running: Option<Arc<AtomicBool>>,
}

impl DeviceQueryHotkeys {
    pub fn new() -> Self {
        Self {
            bindings: Arc::new(Mutex::new(Vec::new())),
            running: None,
        }
    }

    fn start(&mut self) -> Result<(), HotkeyError> {
        let running = Arc::new(AtomicBool::new(true));
        let thread_running = Arc::clone(&running);
        let bindings = Arc::clone(&self.bindings);
        let (ready_tx, ready_rx) = sync_channel(1);

        thread::Builder::new()
            .name("hotkeys".to_string())
            .spawn(move || {
                let Some(device_state) = open_device_state() else {
                    let _ = ready_tx.send(false);
                    return;
                };
                let _ = ready_tx.send(true);

                let mut held: HashSet<HotkeyCombo> = HashSet::new();

                while thread_running.load(Ordering::SeqCst) {
                    let pressed: Vec<Key> =
                        device_state.get_keys().iter().filter_map(map_keycode).collect();

                    let fired: Vec<HotkeyCallback> = {
                        let bindings = bindings.lock().unwrap_or_else(|e| e.into_inner());
                        let mut fired = Vec::new();
                        for (combo, callback) in bindings.iter() {
                            if combo.is_held(&pressed) {
                                // Rising edge only
                                if held.insert(combo.clone()) {
                                    fired.push(Arc::clone(callback));
                                }
                            } else {
                                held.remove(combo);
                            }
                        }
                        fired
                    };

                    for callback in fired {
                        callback();
                    }

                    thread::sleep(POLL_INTERVAL);
                }
            })
            .map_err(|e| HotkeyError::Unavailable(e.to_string()))?;

        match ready_rx.recv() {
            Ok(true) => {
                self.running = Some(running);
                Ok(())
            }
            _ => Err(HotkeyError::Unavailable(
                "cannot read keyboard state (no display server?)".to_string(),
            )),
        }
    }
}

impl Default for DeviceQueryHotkeys {
    fn default() -> Self {
        Self::new()
    }
}

impl HotkeyService for DeviceQueryHotkeys {
    fn register(
        &mut self,
        combo: HotkeyCombo,
        callback: HotkeyCallback,
    ) -> Result<(), HotkeyError> {
        {
            let bindings = self.bindings.lock().unwrap_or_else(|e| e.into_inner());
            if bindings.iter().any(|(existing, _)| *existing == combo) {
                return Err(HotkeyError::AlreadyRegistered(combo));
            }
        }

        if self.running.is_none() {
            self.start()?;
        }

        self.bindings
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((combo, callback));
        Ok(())
    }

    fn unregister_all(&mut self) {
        if let Some(running) = self.running.take() {
            running.store(false, Ordering::SeqCst);
        }
        self.bindings
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}

impl Drop for DeviceQueryHotkeys {
    fn drop(&mut self) {
        self.unregister_all();
    }
}
