//! Daemon app runner

use std::process::ExitCode;
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;

use crate::application::ports::{
    Clipboard, DisplaySurface, HotkeyCallback, HotkeyError, HotkeyService, Keystroke,
    WindowFocus,
};
use crate::application::{
    HistoryObserver, HistoryTracker, PasteConfig, PasteCoordinator, PasteGuard, PasteOutcome,
    SharedHistory,
};
use crate::domain::history::ClipboardSnapshot;
use crate::domain::hotkey::HotkeyCombo;
use crate::domain::surface::SurfaceState;
use crate::infrastructure::{
    create_clipboard, create_keystroke, create_window_focus, ConsoleSurface, DeviceQueryHotkeys,
    NoOpHotkeys, NotificationSurface, SurfaceKind,
};

use super::app::{EXIT_ERROR, EXIT_SUCCESS};
use super::args::DaemonOptions;
use super::ipc::{create_ipc_server, DaemonView, IpcServer, ViewFn};
use super::pid_file::{PidFile, PidFileError};
use super::presenter::Presenter;
use super::signals::{DaemonSignal, DaemonSignalHandler};

/// Run the daemon in the foreground until shutdown
pub async fn run_daemon(options: DaemonOptions) -> ExitCode {
    let presenter = Presenter::new();

    let pid_file = PidFile::new();
    if let Err(e) = pid_file.acquire() {
        match e {
            PidFileError::AlreadyRunning(pid) => {
                presenter.error(&format!("Another daemon is already running (PID: {})", pid));
            }
            _ => presenter.error(&e.to_string()),
        }
        return ExitCode::from(EXIT_ERROR);
    }

    let history = match SharedHistory::new(options.capacity) {
        Ok(history) => history,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let (mut signals, signal_tx) = match DaemonSignalHandler::new().await {
        Ok(s) => s,
        Err(e) => {
            presenter.error(&format!("Failed to setup signal handler: {}", e));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let keystroke = match create_keystroke(options.keystroke_tool).await {
        Ok((keystroke, tool)) => {
            presenter.info(&format!("Paste keystroke: {}", tool));
            keystroke
        }
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let (focus, focus_backend) = create_window_focus().await;
    if focus_backend == "none" {
        presenter.warn("Foreground window tracking unavailable; pastes go to the current window");
    }

    let clipboard = create_clipboard(options.clipboard, options.clipboard_timeout);
    let guard = PasteGuard::new();

    let mut tracker = HistoryTracker::new(Arc::clone(&clipboard), history.clone())
        .with_observer(history_observer(signal_tx.clone(), presenter));
    if options.ignore_own_paste {
        tracker = tracker.with_guard(guard.clone());
    }

    let surface = create_surface(options.surface, &presenter);
    surface.on_close_requested(post(&signal_tx, DaemonSignal::Hide));
    surface.on_paste_requested(post(&signal_tx, DaemonSignal::Paste(None)));

    let mut coordinator = PasteCoordinator::new(
        clipboard,
        focus,
        keystroke,
        surface,
        history.clone(),
        guard,
        PasteConfig {
            paste_delay: options.paste_delay,
            abort_on_focus_loss: options.abort_on_focus_loss,
            ignore_own_paste: options.ignore_own_paste,
        },
    );

    let mut hotkeys: Box<dyn HotkeyService> = if options.hotkeys {
        register_hotkeys(&options, &signal_tx, &presenter)
    } else {
        Box::new(NoOpHotkeys::new())
    };

    let mut server = create_ipc_server();
    if let Err(e) = server.bind() {
        presenter.error(&format!("Failed to bind {}: {}", server.path(), e));
        hotkeys.unregister_all();
        return ExitCode::from(EXIT_ERROR);
    }
    let server: Arc<dyn IpcServer> = Arc::from(server);

    let state = Arc::new(Mutex::new(SurfaceState::Hidden));
    let view = daemon_view(Arc::clone(&state), history);
    let ipc_server = Arc::clone(&server);
    let ipc_tx = signal_tx.clone();
    tokio::spawn(async move {
        if let Err(e) = ipc_server.run(ipc_tx, view).await {
            eprintln!("IPC server stopped: {}", e);
        }
    });

    tokio::spawn(tracker.run(options.poll_interval));

    presenter.daemon_status("Started, watching the clipboard...");
    presenter.info(&format!(
        "PID: {} | IPC: {} | Capacity: {} | Poll: {}",
        std::process::id(),
        server.path(),
        options.capacity,
        options.poll_interval
    ));

    let result = daemon_loop(&mut coordinator, &mut signals, &presenter, &state).await;

    hotkeys.unregister_all();
    server.cleanup();
    let _ = pid_file.release();

    if result {
        ExitCode::from(EXIT_SUCCESS)
    } else {
        ExitCode::from(EXIT_ERROR)
    }
}

/// Callback that posts `signal` into the daemon loop.
///
/// Uses `try_send` because callers run on non-async threads; a full
/// channel drops the event.
fn post(tx: &mpsc::Sender<DaemonSignal>, signal: DaemonSignal) -> HotkeyCallback {
    let tx = tx.clone();
    Arc::new(move || {
        let _ = tx.try_send(signal);
    })
}

fn history_observer(tx: mpsc::Sender<DaemonSignal>, presenter: Presenter) -> HistoryObserver {
    Arc::new(move |snapshot: &ClipboardSnapshot| {
        presenter.captured(snapshot);
        let _ = tx.try_send(DaemonSignal::HistoryChanged);
    })
}

fn create_surface(kind: SurfaceKind, presenter: &Presenter) -> Arc<dyn DisplaySurface> {
    match kind {
        SurfaceKind::Console => {
            let console = ConsoleSurface::new();
            if let Err(e) = console.listen_stdin() {
                presenter.warn(&format!("Console input unavailable: {}", e));
            }
            Arc::new(console)
        }
        SurfaceKind::Notification => Arc::new(NotificationSurface::new()),
    }
}

fn register_hotkeys(
    options: &DaemonOptions,
    tx: &mpsc::Sender<DaemonSignal>,
    presenter: &Presenter,
) -> Box<dyn HotkeyService> {
    let mut service = DeviceQueryHotkeys::new();
    let bindings: [(HotkeyCombo, DaemonSignal); 2] = [
        (options.toggle_hotkey.clone(), DaemonSignal::Toggle),
        (options.paste_hotkey.clone(), DaemonSignal::Paste(None)),
    ];

    for (combo, signal) in bindings {
        match service.register(combo.clone(), post(tx, signal)) {
            Ok(()) => presenter.info(&format!("Hotkey {} registered", combo)),
            Err(HotkeyError::Unavailable(reason)) => {
                presenter.warn(&format!(
                    "Global hotkeys unavailable ({}); use `pasteword daemon` commands instead",
                    reason
                ));
                service.unregister_all();
                return Box::new(NoOpHotkeys::new());
            }
            Err(e) => presenter.warn(&e.to_string()),
        }
    }

    Box::new(service)
}

fn daemon_view(state: Arc<Mutex<SurfaceState>>, history: SharedHistory) -> ViewFn {
    Arc::new(move || DaemonView {
        state: *state.lock().unwrap_or_else(|e| e.into_inner()),
        history: history
            .recent_first()
            .into_iter()
            .map(|snapshot| snapshot.into_content())
            .collect(),
    })
}

async fn daemon_loop<C, F, K, S>(
    coordinator: &mut PasteCoordinator<C, F, K, S>,
    signals: &mut DaemonSignalHandler,
    presenter: &Presenter,
    shared_state: &Arc<Mutex<SurfaceState>>,
) -> bool
where
    C: Clipboard,
    F: WindowFocus,
    K: Keystroke,
    S: DisplaySurface,
{
    loop {
        let Some(signal) = signals.recv().await else {
            // Channel closed
            return false;
        };

        match signal {
            DaemonSignal::Toggle => match coordinator.toggle().await {
                Ok(SurfaceState::Visible) => {
                    let target = coordinator
                        .focus_target()
                        .map(|t| t.to_string())
                        .unwrap_or_else(|| "none".to_string());
                    presenter.daemon_status(&format!("Surface shown (target window: {})", target));
                }
                Ok(SurfaceState::Hidden) => presenter.daemon_status("Surface hidden"),
                Err(e) => presenter.error(&format!("Toggle failed: {}", e)),
            },
            DaemonSignal::Hide => match coordinator.request_hide().await {
                Ok(true) => presenter.daemon_status("Surface hidden"),
                Ok(false) => {}
                Err(e) => presenter.error(&format!("Hide failed: {}", e)),
            },
            DaemonSignal::Select(index) => {
                if coordinator.select(index) {
                    presenter.info(&format!("Selected snippet {}", index));
                } else {
                    presenter.warn(&format!("No snippet at index {}", index));
                }
            }
            DaemonSignal::Paste(index) => {
                let result = match index {
                    Some(index) => coordinator.paste_recent(index).await,
                    None => coordinator.paste_selected().await,
                };
                match result {
                    Ok(PasteOutcome::NothingSelected) => {}
                    Ok(PasteOutcome::Pasted {
                        chars,
                        focus_restored,
                    }) => {
                        presenter.success(&format!("Pasted {} chars", chars));
                        if !focus_restored {
                            presenter.warn("Target window was not restored before pasting");
                        }
                    }
                    Err(e) => presenter.error(&format!("Paste failed: {}", e)),
                }
            }
            DaemonSignal::HistoryChanged => {
                if let Err(e) = coordinator.refresh().await {
                    presenter.warn(&format!("Failed to refresh surface: {}", e));
                }
            }
            DaemonSignal::Shutdown => {
                let _ = coordinator.request_hide().await;
                presenter.daemon_status("Shutting down...");
                return true;
            }
        }

        if let Ok(mut state) = shared_state.lock() {
            *state = coordinator.state();
        }
    }
}
