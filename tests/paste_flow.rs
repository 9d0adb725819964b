//! End-to-end tracker and coordinator scenarios with fake platform adapters

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use pasteword::application::ports::{
    Clipboard, ClipboardError, DisplaySurface, FocusError, Keystroke, KeystrokeError, WindowFocus,
};
use pasteword::application::{
    HistoryTracker, PasteConfig, PasteCoordinator, PasteGuard, PasteOutcome, PollOutcome,
    SharedHistory,
};
use pasteword::domain::duration::Duration;
use pasteword::domain::surface::{FocusTarget, SurfaceState};
use pasteword::infrastructure::ConsoleSurface;

/// In-memory system clipboard
#[derive(Default)]
struct MemoryClipboard {
    content: Mutex<Option<String>>,
}

impl MemoryClipboard {
    fn holding(text: &str) -> Arc<Self> {
        Arc::new(Self {
            content: Mutex::new(Some(text.to_string())),
        })
    }

    fn set(&self, text: &str) {
        *self.content.lock().unwrap() = Some(text.to_string());
    }

    fn get(&self) -> Option<String> {
        self.content.lock().unwrap().clone()
    }
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    async fn read_text(&self) -> Result<Option<String>, ClipboardError> {
        Ok(self.get())
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.set(text);
        Ok(())
    }
}

/// Window manager where tests decide which window is in front
#[derive(Clone, Default)]
struct Desktop {
    foreground: Arc<Mutex<Option<FocusTarget>>>,
}

impl Desktop {
    fn focus(&self, raw: u64) {
        *self.foreground.lock().unwrap() = Some(FocusTarget::from_raw(raw));
    }
}

#[async_trait]
impl WindowFocus for Desktop {
    async fn current(&self) -> Result<Option<FocusTarget>, FocusError> {
        Ok(*self.foreground.lock().unwrap())
    }

    async fn activate(&self, target: FocusTarget) -> Result<(), FocusError> {
        *self.foreground.lock().unwrap() = Some(target);
        Ok(())
    }
}

/// Paste accelerator that records what the focused window received
struct RecordingKeystroke {
    clipboard: Arc<MemoryClipboard>,
    desktop: Desktop,
    received: Arc<Mutex<Vec<(Option<FocusTarget>, String)>>>,
}

#[async_trait]
impl Keystroke for RecordingKeystroke {
    async fn send_paste(&self) -> Result<(), KeystrokeError> {
        let window = *self.desktop.foreground.lock().unwrap();
        let text = self.clipboard.get().unwrap_or_default();
        self.received.lock().unwrap().push((window, text));
        Ok(())
    }
}

type Coordinator = PasteCoordinator<Arc<MemoryClipboard>, Desktop, RecordingKeystroke, ConsoleSurface>;

struct World {
    clipboard: Arc<MemoryClipboard>,
    desktop: Desktop,
    history: SharedHistory,
    guard: PasteGuard,
    surface: ConsoleSurface,
    received: Arc<Mutex<Vec<(Option<FocusTarget>, String)>>>,
    coordinator: Coordinator,
}

fn world(capacity: usize, clipboard_text: &str) -> World {
    let clipboard = MemoryClipboard::holding(clipboard_text);
    let desktop = Desktop::default();
    desktop.focus(0xA);
    let history = SharedHistory::new(capacity).unwrap();
    let guard = PasteGuard::new();
    let surface = ConsoleSurface::new();
    let received = Arc::new(Mutex::new(Vec::new()));

    let coordinator = PasteCoordinator::new(
        Arc::clone(&clipboard),
        desktop.clone(),
        RecordingKeystroke {
            clipboard: Arc::clone(&clipboard),
            desktop: desktop.clone(),
            received: Arc::clone(&received),
        },
        surface.clone(),
        history.clone(),
        guard.clone(),
        PasteConfig {
            paste_delay: Duration::from_millis(5),
            ..PasteConfig::default()
        },
    );

    World {
        clipboard,
        desktop,
        history,
        guard,
        surface,
        received,
        coordinator,
    }
}

impl World {
    fn tracker(&self) -> HistoryTracker<Arc<MemoryClipboard>> {
        HistoryTracker::new(Arc::clone(&self.clipboard), self.history.clone())
            .with_guard(self.guard.clone())
    }

    /// Simulate the user copying each text in turn, polling once per copy
    async fn copy_all(&self, tracker: &mut HistoryTracker<Arc<MemoryClipboard>>, texts: &[&str]) {
        for text in texts {
            self.clipboard.set(text);
            tracker.poll_once().await;
        }
    }

    fn history(&self) -> Vec<String> {
        self.history
            .oldest_first()
            .into_iter()
            .map(|s| s.into_content())
            .collect()
    }
}

#[tokio::test]
async fn bounded_history_keeps_latest_writes() {
    let w = world(3, "");
    let mut tracker = w.tracker();

    w.copy_all(&mut tracker, &["one", "two", "three", "four", "five"]).await;

    assert_eq!(w.history(), ["three", "four", "five"]);
}

#[tokio::test]
async fn duplicates_and_empties_never_append() {
    let w = world(10, "");
    let mut tracker = w.tracker();

    assert_eq!(tracker.poll_once().await, PollOutcome::Empty);
    w.copy_all(&mut tracker, &["same", "same", "", "same"]).await;

    assert_eq!(w.history(), ["same"]);
}

#[tokio::test]
async fn recorded_scenario_with_eviction() {
    let w = world(3, "");
    let mut tracker = w.tracker();

    w.copy_all(&mut tracker, &["a", "a", "b", "a", "c", "d"]).await;

    assert_eq!(w.history(), ["a", "c", "d"]);
}

#[tokio::test]
async fn paste_delivers_selection_and_restores_clipboard() {
    let mut w = world(10, "");
    let mut tracker = w.tracker();
    w.copy_all(&mut tracker, &["alpha", "beta", "original"]).await;

    w.coordinator.toggle().await.unwrap();
    w.desktop.focus(0xB);
    assert!(w.coordinator.select(2));

    let outcome = w.coordinator.paste_selected().await.unwrap();

    assert_eq!(
        outcome,
        PasteOutcome::Pasted {
            chars: 5,
            focus_restored: true
        }
    );
    assert_eq!(
        *w.received.lock().unwrap(),
        [(Some(FocusTarget::from_raw(0xA)), "alpha".to_string())]
    );
    assert_eq!(w.clipboard.get().as_deref(), Some("original"));
    assert_eq!(w.coordinator.state(), SurfaceState::Hidden);
}

#[tokio::test]
async fn paste_of_current_clipboard_value_restores_it() {
    let mut w = world(10, "");
    let mut tracker = w.tracker();
    w.copy_all(&mut tracker, &["same"]).await;

    w.coordinator.toggle().await.unwrap();
    w.coordinator.select(0);
    w.coordinator.paste_selected().await.unwrap();

    assert_eq!(w.clipboard.get().as_deref(), Some("same"));
}

#[tokio::test]
async fn empty_selection_changes_nothing() {
    let mut w = world(10, "");
    let mut tracker = w.tracker();
    w.copy_all(&mut tracker, &["x", "y"]).await;

    w.coordinator.toggle().await.unwrap();
    let outcome = w.coordinator.paste_selected().await.unwrap();

    assert_eq!(outcome, PasteOutcome::NothingSelected);
    assert_eq!(w.history(), ["x", "y"]);
    assert_eq!(w.clipboard.get().as_deref(), Some("y"));
    assert_eq!(w.coordinator.state(), SurfaceState::Visible);
    assert!(w.received.lock().unwrap().is_empty());
}

#[tokio::test]
async fn second_show_recaptures_focus() {
    let mut w = world(10, "");

    w.coordinator.toggle().await.unwrap();
    assert_eq!(w.coordinator.focus_target(), Some(FocusTarget::from_raw(0xA)));
    w.coordinator.toggle().await.unwrap();

    w.desktop.focus(0xC);
    w.coordinator.toggle().await.unwrap();

    assert_eq!(w.coordinator.focus_target(), Some(FocusTarget::from_raw(0xC)));
}

#[tokio::test]
async fn new_snippet_clears_selection_on_refresh() {
    let mut w = world(10, "");
    let mut tracker = w.tracker();
    w.copy_all(&mut tracker, &["one"]).await;

    w.coordinator.toggle().await.unwrap();
    w.coordinator.select(0);
    w.copy_all(&mut tracker, &["two"]).await;
    w.coordinator.refresh().await.unwrap();

    assert!(w.surface.selection().is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn running_tracker_ignores_own_paste() {
    let mut w = world(10, "");
    let mut tracker = w.tracker();
    w.copy_all(&mut tracker, &["old", "current"]).await;

    let background = tokio::spawn(tracker.run(Duration::from_millis(1)));

    w.coordinator.paste_text("old").await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    background.abort();

    assert_eq!(w.history(), ["old", "current"]);
    assert_eq!(w.clipboard.get().as_deref(), Some("current"));
}
