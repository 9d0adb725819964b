//! Timeout wrapper for clipboard adapters

use async_trait::async_trait;
use tokio::time::timeout;

use crate::application::ports::{Clipboard, ClipboardError};
use crate::domain::duration::Duration;

/// Bounds every access of the wrapped clipboard by `limit`.
///
/// A hung clipboard owner then costs one timed-out access instead of
/// freezing the tracker or a paste.
pub struct BoundedClipboard<C: Clipboard> {
    inner: C,
    limit: Duration,
}

impl<C: Clipboard> BoundedClipboard<C> {
    pub fn new(inner: C, limit: Duration) -> Self {
        Self { inner, limit }
    }
}

#[async_trait]
impl<C: Clipboard> Clipboard for BoundedClipboard<C> {
    async fn read_text(&self) -> Result<Option<String>, ClipboardError> {
        timeout(self.limit.as_std(), self.inner.read_text())
            .await
            .map_err(|_| ClipboardError::TimedOut(self.limit.as_millis()))?
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        timeout(self.limit.as_std(), self.inner.write_text(text))
            .await
            .map_err(|_| ClipboardError::TimedOut(self.limit.as_millis()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Hung;

    #[async_trait]
    impl Clipboard for Hung {
        async fn read_text(&self) -> Result<Option<String>, ClipboardError> {
            std::future::pending().await
        }

        async fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
            std::future::pending().await
        }
    }

    struct Ready;

    #[async_trait]
    impl Clipboard for Ready {
        async fn read_text(&self) -> Result<Option<String>, ClipboardError> {
            Ok(Some("ready".to_string()))
        }

        async fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn hung_access_times_out() {
        let clipboard = BoundedClipboard::new(Hung, Duration::from_millis(20));
        assert!(matches!(
            clipboard.read_text().await,
            Err(ClipboardError::TimedOut(20))
        ));
        assert!(matches!(
            clipboard.write_text("x").await,
            Err(ClipboardError::TimedOut(20))
        ));
    }

    #[tokio::test]
    async fn fast_access_passes_through() {
        let clipboard = BoundedClipboard::new(Ready, Duration::from_millis(500));
        assert_eq!(clipboard.read_text().await.unwrap().as_deref(), Some("ready"));
    }
}
