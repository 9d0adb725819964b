//! PID file management for daemon mode

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

/// PID file name inside the temp directory
const PID_FILE_NAME: &str = "pasteword.pid";

/// PID file guarding against a second daemon
pub struct PidFile {
    path: PathBuf,
}

impl PidFile {
    /// Create a PID file manager at the default location
    pub fn new() -> Self {
        Self {
            path: std::env::temp_dir().join(PID_FILE_NAME),
        }
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the PID file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// PID of a live daemon recorded in the file, if any.
    ///
    /// A file naming a dead process is stale and gets removed.
    pub fn is_running(&self) -> Option<u32> {
        let pid: u32 = fs::read_to_string(&self.path).ok()?.trim().parse().ok()?;

        if pid == process::id() {
            return None;
        }

        if process_alive(pid) {
            Some(pid)
        } else {
            let _ = fs::remove_file(&self.path);
            None
        }
    }

    /// Acquire the PID file (fails if another daemon is running)
    pub fn acquire(&self) -> Result<(), PidFileError> {
        if let Some(pid) = self.is_running() {
            return Err(PidFileError::AlreadyRunning(pid));
        }

        fs::write(&self.path, process::id().to_string())
            .map_err(|e| PidFileError::WriteFailed(e.to_string()))
    }

    /// Release the PID file
    pub fn release(&self) -> Result<(), PidFileError> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| PidFileError::RemoveFailed(e.to_string()))?;
        }
        Ok(())
    }
}

impl Default for PidFile {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for PidFile {
    fn drop(&mut self) {
        let _ = self.release();
    }
}

/// Signal 0 probes for existence without delivering anything
#[cfg(unix)]
fn process_alive(pid: u32) -> bool {
    use nix::errno::Errno;
    use nix::sys::signal::kill;
    use nix::unistd::Pid;

    let Ok(raw) = i32::try_from(pid) else {
        return false;
    };
    match kill(Pid::from_raw(raw), None) {
        Ok(()) => true,
        // The process exists but belongs to another user
        Err(Errno::EPERM) => true,
        Err(_) => false,
    }
}

/// Without a cheap liveness probe, a PID file is trusted as-is
#[cfg(not(unix))]
fn process_alive(_pid: u32) -> bool {
    true
}

/// PID file errors
#[derive(Debug, thiserror::Error)]
pub enum PidFileError {
    #[error("Another daemon is already running (PID: {0})")]
    AlreadyRunning(u32),

    #[error("Failed to write PID file: {0}")]
    WriteFailed(String),

    #[error("Failed to remove PID file: {0}")]
    RemoveFailed(String),
}
