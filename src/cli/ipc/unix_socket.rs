//! Unix Domain Socket communication for daemon control
//!
//! Used on Linux and macOS.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::net::{UnixListener, UnixStream};
use tokio::sync::mpsc;

use super::{exchange, handle_connection, IpcClient, IpcServer, ViewFn};
use crate::cli::signals::DaemonSignal;

const SOCKET_NAME: &str = "pasteword.sock";

/// Socket path resolver
#[derive(Debug, Clone)]
pub struct SocketPath {
    path: PathBuf,
}

impl SocketPath {
    /// Create socket path, preferring XDG_RUNTIME_DIR
    pub fn new() -> Self {
        let dir = std::env::var_os("XDG_RUNTIME_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(std::env::temp_dir);
        Self {
            path: dir.join(SOCKET_NAME),
        }
    }

    /// Use an explicit socket path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the socket path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if socket file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Remove socket file if it exists
    pub fn cleanup(&self) -> io::Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

impl Default for SocketPath {
    fn default() -> Self {
        Self::new()
    }
}

/// Unix Domain Socket server for daemon commands
pub struct UnixSocketServer {
    socket_path: SocketPath,
    listener: Option<UnixListener>,
}

impl UnixSocketServer {
    /// Create a new socket server
    pub fn new(socket_path: SocketPath) -> Self {
        Self {
            socket_path,
            listener: None,
        }
    }
}

impl Drop for UnixSocketServer {
    fn drop(&mut self) {
        self.cleanup();
    }
}

#[async_trait]
impl IpcServer for UnixSocketServer {
    fn bind(&mut self) -> io::Result<()> {
        // The PID file already ruled out a live daemon, so any socket here is stale
        self.socket_path.cleanup()?;
        self.listener = Some(UnixListener::bind(self.socket_path.path())?);
        Ok(())
    }

    fn path(&self) -> String {
        self.socket_path.path().to_string_lossy().to_string()
    }

    async fn run(&self, tx: mpsc::Sender<DaemonSignal>, view: ViewFn) -> io::Result<()> {
        let listener = self
            .listener
            .as_ref()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotConnected, "Socket not bound"))?;

        loop {
            match listener.accept().await {
                Ok((stream, _addr)) => {
                    let tx = tx.clone();
                    let view = ViewFn::clone(&view);
                    tokio::spawn(async move {
                        if let Err(e) = handle_connection(stream, tx, view).await {
                            eprintln!("Socket connection error: {}", e);
                        }
                    });
                }
                Err(e) => {
                    eprintln!("Socket accept error: {}", e);
                }
            }
        }
    }

    fn cleanup(&self) {
        let _ = self.socket_path.cleanup();
    }
}

/// Unix Domain Socket client for sending commands to daemon
pub struct UnixSocketClient {
    socket_path: SocketPath,
}

impl UnixSocketClient {
    /// Create a new socket client
    pub fn new(socket_path: SocketPath) -> Self {
        Self { socket_path }
    }
}

#[async_trait]
impl IpcClient for UnixSocketClient {
    fn is_daemon_running(&self) -> bool {
        self.socket_path.exists()
    }

    async fn send_command(&self, cmd: &str) -> io::Result<String> {
        let stream = UnixStream::connect(self.socket_path.path()).await?;
        exchange(stream, cmd).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ipc::DaemonView;
    use crate::domain::surface::SurfaceState;
    use std::sync::Arc;
    use tempfile::tempdir;

    #[test]
    fn socket_path_ends_with_socket_name() {
        let socket_path = SocketPath::new();
        assert!(socket_path.path().ends_with(SOCKET_NAME));
    }

    #[tokio::test]
    async fn client_talks_to_server() {
        let dir = tempdir().unwrap();
        let path = SocketPath::with_path(dir.path().join("test.sock"));

        let mut server = UnixSocketServer::new(path.clone());
        server.bind().unwrap();

        let (tx, mut rx) = mpsc::channel(4);
        let view: ViewFn = Arc::new(|| DaemonView {
            state: SurfaceState::Visible,
            history: vec!["one".to_string()],
        });
        tokio::spawn(async move {
            let _ = server.run(tx, view).await;
        });

        let client = UnixSocketClient::new(path);
        assert!(client.is_daemon_running());
        assert_eq!(client.send_command("status").await.unwrap().trim(), "visible");
        assert_eq!(client.send_command("select 0").await.unwrap().trim(), "ok");
        assert_eq!(rx.recv().await, Some(DaemonSignal::Select(0)));
    }
}
