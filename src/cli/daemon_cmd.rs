//! Daemon command handler - sends commands to running daemon via IPC

use super::args::DaemonAction;
use super::ipc::{create_ipc_client, IpcCommand};
use super::presenter::Presenter;

impl From<DaemonAction> for IpcCommand {
    fn from(action: DaemonAction) -> Self {
        match action {
            DaemonAction::Toggle => IpcCommand::Toggle,
            DaemonAction::Hide => IpcCommand::Hide,
            DaemonAction::Select { index } => IpcCommand::Select(index),
            DaemonAction::Paste { index } => IpcCommand::Paste(index),
            DaemonAction::List => IpcCommand::List,
            DaemonAction::Status => IpcCommand::Status,
            DaemonAction::Quit => IpcCommand::Quit,
        }
    }
}

/// Handle daemon subcommand
pub async fn handle_daemon_command(
    action: DaemonAction,
    presenter: &Presenter,
) -> Result<(), String> {
    let client = create_ipc_client();

    if !client.is_daemon_running() {
        return Err("No daemon running. Start one with: pasteword".to_string());
    }

    let cmd = IpcCommand::from(action).to_line();
    let response = client
        .send_command(&cmd)
        .await
        .map_err(|e| format!("Failed to communicate with daemon: {}", e))?;
    let response = response.trim();

    if let Some(stripped) = response.strip_prefix("error:") {
        return Err(stripped.trim().to_string());
    }

    match action {
        DaemonAction::List => presenter.output(response),
        DaemonAction::Status => presenter.output(response),
        _ => presenter.info(&format!("Command sent: {}", cmd)),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_map_to_wire_lines() {
        assert_eq!(IpcCommand::from(DaemonAction::Toggle).to_line(), "toggle");
        assert_eq!(
            IpcCommand::from(DaemonAction::Select { index: 2 }).to_line(),
            "select 2"
        );
        assert_eq!(
            IpcCommand::from(DaemonAction::Paste { index: None }).to_line(),
            "paste"
        );
        assert_eq!(IpcCommand::from(DaemonAction::Quit).to_line(), "quit");
    }
}
