//! Daemon event channel and OS signal handling

use colored::Colorize;
use tokio::sync::mpsc;

/// Capacity of the daemon event channel
const CHANNEL_CAPACITY: usize = 32;

/// Events handled by the daemon's foreground loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaemonSignal {
    /// Show the surface if hidden, hide it if visible
    Toggle,
    /// Hide the surface (close request or IPC `hide`)
    Hide,
    /// Select a snippet (0 = most recent)
    Select(usize),
    /// Paste the selection, or the snippet at the given index
    Paste(Option<usize>),
    /// The tracker appended a snapshot
    HistoryChanged,
    /// Shutdown daemon (SIGINT/SIGTERM or IPC `quit`)
    Shutdown,
}

/// Daemon signal handler
///
/// Handles OS shutdown signals and owns the receiving end of the channel
/// that hotkeys, IPC, the surface and the tracker post into.
pub struct DaemonSignalHandler {
    receiver: mpsc::Receiver<DaemonSignal>,
}

impl DaemonSignalHandler {
    /// Create the handler and start listening for shutdown signals.
    ///
    /// Returns the handler and a sender for the other event sources.
    pub async fn new() -> Result<(Self, mpsc::Sender<DaemonSignal>), std::io::Error> {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        listen_for_shutdown(tx.clone())?;
        Ok((Self { receiver: rx }, tx))
    }

    /// Wait for the next signal
    pub async fn recv(&mut self) -> Option<DaemonSignal> {
        self.receiver.recv().await
    }
}

#[cfg(unix)]
fn listen_for_shutdown(tx: mpsc::Sender<DaemonSignal>) -> Result<(), std::io::Error> {
    use tokio::signal::unix::{signal, SignalKind};

    for (kind, name) in [
        (SignalKind::interrupt(), "SIGINT"),
        (SignalKind::terminate(), "SIGTERM"),
    ] {
        let mut stream = signal(kind)?;
        let tx = tx.clone();
        tokio::spawn(async move {
            stream.recv().await;
            eprintln!("{} Received {} (shutdown)", "↓".cyan(), name);
            let _ = tx.send(DaemonSignal::Shutdown).await;
        });
    }
    Ok(())
}

#[cfg(windows)]
fn listen_for_shutdown(tx: mpsc::Sender<DaemonSignal>) -> Result<(), std::io::Error> {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            eprintln!("{} Received Ctrl+C (shutdown)", "↓".cyan());
            let _ = tx.send(DaemonSignal::Shutdown).await;
        }
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daemon_signal_equality() {
        assert_eq!(DaemonSignal::Paste(None), DaemonSignal::Paste(None));
        assert_ne!(DaemonSignal::Paste(Some(1)), DaemonSignal::Paste(None));
        assert_ne!(DaemonSignal::Toggle, DaemonSignal::Hide);
    }

    #[tokio::test]
    async fn handler_receives_posted_signals() {
        let (mut handler, tx) = DaemonSignalHandler::new().await.unwrap();
        tx.send(DaemonSignal::Select(3)).await.unwrap();
        tx.send(DaemonSignal::HistoryChanged).await.unwrap();

        assert_eq!(handler.recv().await, Some(DaemonSignal::Select(3)));
        assert_eq!(handler.recv().await, Some(DaemonSignal::HistoryChanged));
    }
}
