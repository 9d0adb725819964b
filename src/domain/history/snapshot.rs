//! Clipboard snapshot value object

use std::fmt;

/// Marker appended to truncated previews
const ELLIPSIS: char = '…';

/// One captured clipboard text value.
///
/// Snapshots have no identity beyond their content: two snapshots
/// holding the same text are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClipboardSnapshot {
    content: String,
}

impl ClipboardSnapshot {
    /// Create a snapshot from captured text
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// The captured text
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume the snapshot and return its text
    pub fn into_content(self) -> String {
        self.content
    }

    /// Length of the text in characters
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Single-line preview of at most `max_chars` characters.
    ///
    /// Line breaks and tabs are folded into spaces; a trailing ellipsis
    /// marks truncation.
    pub fn preview(&self, max_chars: usize) -> String {
        let folded: String = self
            .content
            .chars()
            .map(|c| if c.is_whitespace() { ' ' } else { c })
            .collect();
        let folded = folded.trim();

        if folded.chars().count() <= max_chars {
            return folded.to_string();
        }

        let mut preview: String = folded.chars().take(max_chars.saturating_sub(1)).collect();
        preview.push(ELLIPSIS);
        preview
    }
}

impl fmt::Display for ClipboardSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

impl From<&str> for ClipboardSnapshot {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ClipboardSnapshot {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_by_value() {
        assert_eq!(ClipboardSnapshot::new("abc"), ClipboardSnapshot::from("abc"));
        assert_ne!(ClipboardSnapshot::new("abc"), ClipboardSnapshot::new("abc "));
    }

    #[test]
    fn preview_short_text_unchanged() {
        let snapshot = ClipboardSnapshot::new("hello");
        assert_eq!(snapshot.preview(10), "hello");
    }

    #[test]
    fn preview_folds_line_breaks() {
        let snapshot = ClipboardSnapshot::new("first\nsecond\tthird");
        assert_eq!(snapshot.preview(40), "first second third");
    }

    #[test]
    fn preview_truncates_with_ellipsis() {
        let snapshot = ClipboardSnapshot::new("abcdefghij");
        let preview = snapshot.preview(5);
        assert_eq!(preview, "abcd…");
        assert_eq!(preview.chars().count(), 5);
    }

    #[test]
    fn preview_counts_characters_not_bytes() {
        let snapshot = ClipboardSnapshot::new("粘贴你的文字");
        assert_eq!(snapshot.preview(6), "粘贴你的文字");
        assert_eq!(snapshot.preview(3), "粘贴…");
        assert_eq!(snapshot.char_count(), 6);
    }
}
