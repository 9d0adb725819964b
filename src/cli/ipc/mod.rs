//! IPC (Inter-Process Communication) module for daemon control
//!
//! One line in, one line out. Provides platform-specific transports:
//! - Unix (Linux/macOS): Unix Domain Sockets
//! - Windows: Named Pipes

#[cfg(windows)]
mod named_pipe;
#[cfg(unix)]
mod unix_socket;

#[cfg(windows)]
pub use named_pipe::{NamedPipeClient, NamedPipeServer, PipePath};
#[cfg(unix)]
pub use unix_socket::{SocketPath, UnixSocketClient, UnixSocketServer};

use std::io;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;

use super::signals::DaemonSignal;
use crate::domain::surface::SurfaceState;

/// What the daemon exposes to IPC queries
#[derive(Debug, Clone, Default)]
pub struct DaemonView {
    pub state: SurfaceState,
    /// Snippet contents, most recent first
    pub history: Vec<String>,
}

/// Snapshot function type for IPC servers
pub type ViewFn = Arc<dyn Fn() -> DaemonView + Send + Sync>;

/// A parsed IPC command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpcCommand {
    Toggle,
    Hide,
    Select(usize),
    Paste(Option<usize>),
    List,
    Status,
    Quit,
}

impl IpcCommand {
    /// Parse one command line such as `toggle` or `paste 2`
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut parts = line.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let arg = parts.next();
        if parts.next().is_some() {
            return Err("too many arguments".to_string());
        }

        let index = |arg: &str| {
            arg.parse::<usize>()
                .map_err(|_| format!("invalid index '{}'", arg))
        };

        match (name, arg) {
            ("toggle", None) => Ok(Self::Toggle),
            ("hide", None) => Ok(Self::Hide),
            ("select", Some(arg)) => index(arg).map(Self::Select),
            ("select", None) => Err("select needs an index".to_string()),
            ("paste", arg) => arg.map(index).transpose().map(Self::Paste),
            ("list", None) => Ok(Self::List),
            ("status", None) => Ok(Self::Status),
            ("quit", None) => Ok(Self::Quit),
            ("", _) => Err("empty command".to_string()),
            _ => Err("unknown command".to_string()),
        }
    }

    /// Wire form of the command
    pub fn to_line(&self) -> String {
        match self {
            Self::Toggle => "toggle".to_string(),
            Self::Hide => "hide".to_string(),
            Self::Select(index) => format!("select {}", index),
            Self::Paste(Some(index)) => format!("paste {}", index),
            Self::Paste(None) => "paste".to_string(),
            Self::List => "list".to_string(),
            Self::Status => "status".to_string(),
            Self::Quit => "quit".to_string(),
        }
    }
}

/// Produce the response line for `line`, forwarding actions to the daemon loop
pub async fn respond(line: &str, tx: &mpsc::Sender<DaemonSignal>, view: &ViewFn) -> String {
    let command = match IpcCommand::parse(line.trim()) {
        Ok(command) => command,
        Err(e) => return format!("error: {}", e),
    };

    let signal = match command {
        IpcCommand::Status => return view().state.to_string(),
        IpcCommand::List => {
            return serde_json::to_string(&view().history)
                .unwrap_or_else(|e| format!("error: {}", e));
        }
        IpcCommand::Select(index) | IpcCommand::Paste(Some(index)) => {
            let len = view().history.len();
            if index >= len {
                return format!("error: index {} out of range ({} snippets)", index, len);
            }
            if let IpcCommand::Select(_) = command {
                DaemonSignal::Select(index)
            } else {
                DaemonSignal::Paste(Some(index))
            }
        }
        IpcCommand::Paste(None) => DaemonSignal::Paste(None),
        IpcCommand::Toggle => DaemonSignal::Toggle,
        IpcCommand::Hide => DaemonSignal::Hide,
        IpcCommand::Quit => DaemonSignal::Shutdown,
    };

    match tx.send(signal).await {
        Ok(()) => "ok".to_string(),
        Err(_) => "error: daemon is shutting down".to_string(),
    }
}

/// Serve a single connection: read one line, write one response line
async fn handle_connection<T>(
    stream: T,
    tx: mpsc::Sender<DaemonSignal>,
    view: ViewFn,
) -> io::Result<()>
where
    T: AsyncRead + AsyncWrite + Unpin,
{
    let (reader, mut writer) = tokio::io::split(stream);
    let mut reader = BufReader::new(reader);
    let mut line = String::new();
    reader.read_line(&mut line).await?;

    let response = respond(&line, &tx, &view).await;

    writer.write_all(format!("{}\n", response).as_bytes()).await?;
    writer.flush().await?;
    writer.shutdown().await?;
    Ok(())
}

/// Send `line` over `stream` and read the one-line response
async fn exchange<T>(stream: T, line: &str) -> io::Result<String>
where
    T: AsyncRead + AsyncWrite + Unpin,
{
    let (reader, mut writer) = tokio::io::split(stream);
    writer.write_all(format!("{}\n", line).as_bytes()).await?;
    writer.flush().await?;

    let mut reader = BufReader::new(reader);
    let mut response = String::new();
    reader.read_line(&mut response).await?;
    Ok(response)
}

/// Trait for IPC servers that listen for daemon commands
#[async_trait::async_trait]
pub trait IpcServer: Send + Sync {
    /// Bind to the IPC endpoint
    fn bind(&mut self) -> io::Result<()>;

    /// Get the path/name of the IPC endpoint
    fn path(&self) -> String;

    /// Accept connections forever, forwarding actions to `tx`.
    ///
    /// `view` is called per query for the current state and history.
    async fn run(&self, tx: mpsc::Sender<DaemonSignal>, view: ViewFn) -> io::Result<()>;

    /// Cleanup IPC resources
    fn cleanup(&self);
}

/// Trait for IPC clients that send commands to the daemon
#[async_trait::async_trait]
pub trait IpcClient: Send + Sync {
    /// Check if daemon appears to be running (endpoint exists)
    fn is_daemon_running(&self) -> bool;

    /// Send a command and receive response
    async fn send_command(&self, cmd: &str) -> io::Result<String>;
}

/// Create the appropriate IPC server for the current platform
#[cfg(unix)]
pub fn create_ipc_server() -> Box<dyn IpcServer> {
    Box::new(UnixSocketServer::new(SocketPath::new()))
}

#[cfg(windows)]
pub fn create_ipc_server() -> Box<dyn IpcServer> {
    Box::new(NamedPipeServer::new(PipePath::new()))
}

/// Create the appropriate IPC client for the current platform
#[cfg(unix)]
pub fn create_ipc_client() -> Box<dyn IpcClient> {
    Box::new(UnixSocketClient::new(SocketPath::new()))
}

#[cfg(windows)]
pub fn create_ipc_client() -> Box<dyn IpcClient> {
    Box::new(NamedPipeClient::new(PipePath::new()))
}
