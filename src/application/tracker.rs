//! History tracker use case

use std::sync::Arc;

use crate::domain::duration::Duration;
use crate::domain::history::ClipboardSnapshot;

use super::guard::PasteGuard;
use super::history::SharedHistory;
use super::ports::Clipboard;

/// Callback fired after a snapshot has been appended to the history.
///
/// Runs on the tracker's task; implementations hand the notification off
/// to the foreground loop instead of touching the display.
pub type HistoryObserver = Arc<dyn Fn(&ClipboardSnapshot) + Send + Sync>;

/// What a single poll did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// New content was appended to the history
    Appended,
    /// Content equals the previous observation
    Unchanged,
    /// Clipboard was empty or held no text
    Empty,
    /// Clipboard could not be read
    Unreadable,
    /// A paste sequence owns the clipboard; nothing was recorded
    Suspended,
}

/// Polls the clipboard and keeps the shared history current.
pub struct HistoryTracker<C: Clipboard> {
    clipboard: C,
    history: SharedHistory,
    guard: Option<PasteGuard>,
    observer: Option<HistoryObserver>,
    last_observed: Option<String>,
}

impl<C: Clipboard> HistoryTracker<C> {
    /// Create a tracker writing into `history`
    pub fn new(clipboard: C, history: SharedHistory) -> Self {
        Self {
            clipboard,
            history,
            guard: None,
            observer: None,
            last_observed: None,
        }
    }

    /// Skip polls while `guard` is active
    pub fn with_guard(mut self, guard: PasteGuard) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Notify `observer` after every append
    pub fn with_observer(mut self, observer: HistoryObserver) -> Self {
        self.observer = Some(observer);
        self
    }

    fn suspended(&self) -> bool {
        self.guard.as_ref().is_some_and(PasteGuard::is_active)
    }

    /// Read the clipboard once and append its content if it is new.
    ///
    /// Read failures count as "no content". The comparison is against the
    /// last appended value, so `a, <empty>, a` appends `a` only once.
    pub async fn poll_once(&mut self) -> PollOutcome {
        if self.suspended() {
            return PollOutcome::Suspended;
        }

        let content = match self.clipboard.read_text().await {
            Ok(Some(content)) => content,
            Ok(None) => return PollOutcome::Empty,
            Err(_) => return PollOutcome::Unreadable,
        };

        // The guard may have been raised while the read was pending
        if self.suspended() {
            return PollOutcome::Suspended;
        }

        if content.is_empty() {
            return PollOutcome::Empty;
        }
        if self.last_observed.as_deref() == Some(content.as_str()) {
            return PollOutcome::Unchanged;
        }

        let snapshot = ClipboardSnapshot::new(content.clone());
        self.last_observed = Some(content);
        self.history.push(snapshot.clone());

        if let Some(observer) = &self.observer {
            observer(&snapshot);
        }

        PollOutcome::Appended
    }

    /// Poll forever with `interval` between reads
    pub async fn run(mut self, interval: Duration) {
        loop {
            self.poll_once().await;
            tokio::time::sleep(interval.as_std()).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::ClipboardError;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Clipboard that replays a scripted sequence of reads
    struct ScriptedClipboard {
        reads: Mutex<VecDeque<Result<Option<String>, ClipboardError>>>,
    }

    impl ScriptedClipboard {
        fn new(reads: Vec<Result<Option<String>, ClipboardError>>) -> Self {
            Self {
                reads: Mutex::new(reads.into()),
            }
        }

        fn texts(texts: &[&str]) -> Self {
            Self::new(texts.iter().map(|t| Ok(Some(t.to_string()))).collect())
        }
    }

    #[async_trait]
    impl Clipboard for ScriptedClipboard {
        async fn read_text(&self) -> Result<Option<String>, ClipboardError> {
            self.reads.lock().unwrap().pop_front().unwrap_or(Ok(None))
        }

        async fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
            Ok(())
        }
    }

    fn contents(history: &SharedHistory) -> Vec<String> {
        history
            .oldest_first()
            .into_iter()
            .map(ClipboardSnapshot::into_content)
            .collect()
    }

    #[tokio::test]
    async fn appends_new_content() {
        let history = SharedHistory::new(10).unwrap();
        let mut tracker = HistoryTracker::new(ScriptedClipboard::texts(&["hello"]), history.clone());

        assert_eq!(tracker.poll_once().await, PollOutcome::Appended);
        assert_eq!(contents(&history), ["hello"]);
    }

    #[tokio::test]
    async fn suppresses_consecutive_duplicates() {
        let history = SharedHistory::new(10).unwrap();
        let mut tracker =
            HistoryTracker::new(ScriptedClipboard::texts(&["x", "x", "x"]), history.clone());

        assert_eq!(tracker.poll_once().await, PollOutcome::Appended);
        assert_eq!(tracker.poll_once().await, PollOutcome::Unchanged);
        assert_eq!(tracker.poll_once().await, PollOutcome::Unchanged);
        assert_eq!(history.len(), 1);
    }

    #[tokio::test]
    async fn empty_and_failed_reads_never_append() {
        let history = SharedHistory::new(10).unwrap();
        let clipboard = ScriptedClipboard::new(vec![
            Ok(None),
            Ok(Some(String::new())),
            Err(ClipboardError::ReadFailed("locked".to_string())),
        ]);
        let mut tracker = HistoryTracker::new(clipboard, history.clone());

        assert_eq!(tracker.poll_once().await, PollOutcome::Empty);
        assert_eq!(tracker.poll_once().await, PollOutcome::Empty);
        assert_eq!(tracker.poll_once().await, PollOutcome::Unreadable);
        assert!(history.is_empty());
    }

    #[tokio::test]
    async fn empty_read_does_not_reset_duplicate_check() {
        let history = SharedHistory::new(10).unwrap();
        let clipboard = ScriptedClipboard::new(vec![
            Ok(Some("a".to_string())),
            Ok(None),
            Ok(Some("a".to_string())),
        ]);
        let mut tracker = HistoryTracker::new(clipboard, history.clone());

        for _ in 0..3 {
            tracker.poll_once().await;
        }
        assert_eq!(contents(&history), ["a"]);
    }

    #[tokio::test]
    async fn scenario_with_eviction() {
        let history = SharedHistory::new(3).unwrap();
        let mut tracker = HistoryTracker::new(
            ScriptedClipboard::texts(&["a", "a", "b", "a", "c", "d"]),
            history.clone(),
        );

        let mut appended = 0;
        for _ in 0..6 {
            if tracker.poll_once().await == PollOutcome::Appended {
                appended += 1;
            }
        }

        assert_eq!(appended, 5);
        assert_eq!(contents(&history), ["a", "c", "d"]);
    }

    #[tokio::test]
    async fn observer_fires_once_per_append() {
        let history = SharedHistory::new(10).unwrap();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let mut tracker =
            HistoryTracker::new(ScriptedClipboard::texts(&["a", "a", "b"]), history)
                .with_observer(Arc::new(move |_: &ClipboardSnapshot| {
                    counter.fetch_add(1, Ordering::SeqCst);
                }));

        for _ in 0..3 {
            tracker.poll_once().await;
        }
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn active_guard_suspends_polling() {
        let history = SharedHistory::new(10).unwrap();
        let guard = PasteGuard::new();
        let mut tracker = HistoryTracker::new(ScriptedClipboard::texts(&["pasted", "later"]), history.clone())
            .with_guard(guard.clone());

        let token = guard.begin();
        assert_eq!(tracker.poll_once().await, PollOutcome::Suspended);
        drop(token);

        // The suspended poll did not consume a read
        assert_eq!(tracker.poll_once().await, PollOutcome::Appended);
        assert_eq!(contents(&history), ["pasted"]);
    }
}
