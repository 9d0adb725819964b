//! Desktop-notification selection surface using notify-rust
//!
//! Works on Windows, macOS, and Linux. Notifications cannot take input,
//! so selection and paste come from `pasteword daemon select|paste`.

use async_trait::async_trait;

use crate::application::ports::{DisplaySurface, SurfaceError};
use crate::domain::history::ClipboardSnapshot;

use super::list::{SnippetList, PREVIEW_CHARS};

/// Selection surface shown as a desktop notification
#[derive(Clone)]
pub struct NotificationSurface {
    list: SnippetList,
    app_name: String,
}

impl NotificationSurface {
    pub fn new() -> Self {
        Self::with_app_name("PasteWord")
    }

    /// Create with custom app name
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            list: SnippetList::default(),
            app_name: app_name.into(),
        }
    }

    /// Notification body: one numbered preview per line
    fn body(snippets: &[ClipboardSnapshot]) -> String {
        if snippets.is_empty() {
            return "(history is empty)".to_string();
        }
        snippets
            .iter()
            .enumerate()
            .map(|(index, snippet)| format!("{}: {}", index, snippet.preview(PREVIEW_CHARS)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for NotificationSurface {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DisplaySurface for NotificationSurface {
    async fn render(&self, snippets: &[ClipboardSnapshot]) -> Result<(), SurfaceError> {
        self.list.replace(snippets);
        Ok(())
    }

    fn selection(&self) -> Option<String> {
        self.list.selection()
    }

    fn select(&self, index: usize) -> bool {
        self.list.select(index)
    }

    async fn show(&self) -> Result<(), SurfaceError> {
        self.list.set_visible(true);

        let app_name = self.app_name.clone();
        let body = Self::body(&self.list.snippets());

        // notify-rust operations can block, so run in spawn_blocking
        tokio::task::spawn_blocking(move || {
            notify_rust::Notification::new()
                .appname(&app_name)
                .summary("Clipboard history")
                .body(&body)
                .icon("edit-paste")
                .show()
                .map(|_| ())
                .map_err(|e| SurfaceError::ShowFailed(e.to_string()))
        })
        .await
        .map_err(|e| SurfaceError::ShowFailed(format!("Task join error: {}", e)))?
    }

    async fn hide(&self) -> Result<(), SurfaceError> {
        self.list.set_visible(false);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_numbers_snippets() {
        let snippets: Vec<ClipboardSnapshot> = vec!["first\nline".into(), "second".into()];
        assert_eq!(NotificationSurface::body(&snippets), "0: first line\n1: second");
    }

    #[test]
    fn body_for_empty_history() {
        assert_eq!(NotificationSurface::body(&[]), "(history is empty)");
    }

    #[tokio::test]
    async fn selection_follows_render() {
        let surface = NotificationSurface::with_app_name("Test");
        let snippets = vec![ClipboardSnapshot::new("a"), ClipboardSnapshot::new("b")];
        surface.render(&snippets).await.unwrap();
        assert!(surface.select(1));
        assert_eq!(surface.selection().as_deref(), Some("b"));
    }
}
