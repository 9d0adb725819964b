//! Named Pipe communication for daemon control on Windows

use std::io;

use async_trait::async_trait;
use tokio::net::windows::named_pipe::{ClientOptions, ServerOptions};
use tokio::sync::mpsc;

use super::{exchange, handle_connection, IpcClient, IpcServer, ViewFn};
use crate::cli::signals::DaemonSignal;

/// Named pipe path
const PIPE_NAME: &str = r"\\.\pipe\pasteword";

/// Named pipe path resolver
#[derive(Debug, Clone)]
pub struct PipePath {
    path: String,
}

impl PipePath {
    /// Create the default pipe path
    pub fn new() -> Self {
        Self {
            path: PIPE_NAME.to_string(),
        }
    }

    /// Get the pipe path
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Check if named pipe exists
    pub fn exists(&self) -> bool {
        std::fs::metadata(&self.path).is_ok()
    }
}

impl Default for PipePath {
    fn default() -> Self {
        Self::new()
    }
}

/// Named Pipe server for daemon commands
pub struct NamedPipeServer {
    pipe_path: PipePath,
    bound: bool,
}

impl NamedPipeServer {
    /// Create a new pipe server
    pub fn new(pipe_path: PipePath) -> Self {
        Self {
            pipe_path,
            bound: false,
        }
    }
}

#[async_trait]
impl IpcServer for NamedPipeServer {
    fn bind(&mut self) -> io::Result<()> {
        // Pipe instances are created per connection in `run`
        self.bound = true;
        Ok(())
    }

    fn path(&self) -> String {
        self.pipe_path.path().to_string()
    }

    async fn run(&self, tx: mpsc::Sender<DaemonSignal>, view: ViewFn) -> io::Result<()> {
        if !self.bound {
            return Err(io::Error::new(io::ErrorKind::NotConnected, "Pipe not bound"));
        }

        loop {
            let server = ServerOptions::new()
                .first_pipe_instance(false)
                .create(self.pipe_path.path())?;

            server.connect().await?;

            let tx = tx.clone();
            let view = ViewFn::clone(&view);
            tokio::spawn(async move {
                if let Err(e) = handle_connection(server, tx, view).await {
                    eprintln!("Pipe connection error: {}", e);
                }
            });
        }
    }

    fn cleanup(&self) {}
}

/// Named Pipe client for sending commands to daemon
pub struct NamedPipeClient {
    pipe_path: PipePath,
}

impl NamedPipeClient {
    /// Create a new pipe client
    pub fn new(pipe_path: PipePath) -> Self {
        Self { pipe_path }
    }
}

#[async_trait]
impl IpcClient for NamedPipeClient {
    fn is_daemon_running(&self) -> bool {
        self.pipe_path.exists()
    }

    async fn send_command(&self, cmd: &str) -> io::Result<String> {
        let client = ClientOptions::new().open(self.pipe_path.path())?;
        exchange(client, cmd).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipe_path_creates() {
        let path = PipePath::new();
        assert_eq!(path.path(), PIPE_NAME);
    }
}
