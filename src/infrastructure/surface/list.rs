//! Selection state shared by the surface adapters

use std::sync::{Arc, Mutex, MutexGuard};

use crate::application::ports::SurfaceCallback;
use crate::domain::history::ClipboardSnapshot;

/// Characters shown per snippet
pub(super) const PREVIEW_CHARS: usize = 60;

#[derive(Default)]
struct Inner {
    snippets: Vec<ClipboardSnapshot>,
    selected: Option<usize>,
    visible: bool,
    on_close: Option<SurfaceCallback>,
    on_paste: Option<SurfaceCallback>,
}

/// Rendered snippets, the current selection, and the user callbacks.
#[derive(Clone, Default)]
pub(super) struct SnippetList {
    inner: Arc<Mutex<Inner>>,
}

impl SnippetList {
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Replace the snippets. Indexes shift on every render, so the
    /// selection is dropped.
    pub fn replace(&self, snippets: &[ClipboardSnapshot]) {
        let mut inner = self.lock();
        inner.snippets = snippets.to_vec();
        inner.selected = None;
    }

    pub fn snippets(&self) -> Vec<ClipboardSnapshot> {
        self.lock().snippets.clone()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.lock().selected
    }

    pub fn selection(&self) -> Option<String> {
        let inner = self.lock();
        let index = inner.selected?;
        inner.snippets.get(index).map(|s| s.content().to_string())
    }

    pub fn select(&self, index: usize) -> bool {
        let mut inner = self.lock();
        if index >= inner.snippets.len() {
            return false;
        }
        inner.selected = Some(index);
        true
    }

    pub fn is_visible(&self) -> bool {
        self.lock().visible
    }

    pub fn set_visible(&self, visible: bool) {
        self.lock().visible = visible;
    }

    pub fn set_on_close(&self, callback: SurfaceCallback) {
        self.lock().on_close = Some(callback);
    }

    pub fn set_on_paste(&self, callback: SurfaceCallback) {
        self.lock().on_paste = Some(callback);
    }

    // Callbacks run outside the lock
    pub fn fire_close(&self) {
        let callback = self.lock().on_close.clone();
        if let Some(callback) = callback {
            callback();
        }
    }

    pub fn fire_paste(&self) {
        let callback = self.lock().on_paste.clone();
        if let Some(callback) = callback {
            callback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(texts: &[&str]) -> SnippetList {
        let list = SnippetList::default();
        let snippets: Vec<ClipboardSnapshot> = texts.iter().map(|t| (*t).into()).collect();
        list.replace(&snippets);
        list
    }

    #[test]
    fn select_in_range() {
        let list = list(&["newest", "older"]);
        assert!(list.select(1));
        assert_eq!(list.selection().as_deref(), Some("older"));
    }

    #[test]
    fn select_out_of_range_keeps_selection() {
        let list = list(&["only"]);
        assert!(list.select(0));
        assert!(!list.select(3));
        assert_eq!(list.selected_index(), Some(0));
    }

    #[test]
    fn replace_clears_selection() {
        let list = list(&["a", "b"]);
        list.select(0);
        list.replace(&[ClipboardSnapshot::new("c")]);
        assert!(list.selection().is_none());
    }
}
