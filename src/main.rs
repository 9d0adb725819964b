//! PasteWord CLI entry point

use std::process::ExitCode;

use clap::Parser;

use pasteword::cli::{
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    daemon_options, handle_daemon_command, load_merged_config, run_daemon, Presenter, EXIT_ERROR,
    EXIT_USAGE_ERROR,
};
use pasteword::domain::config::{AppConfig, LinuxConfig};
use pasteword::infrastructure::{SurfaceKind, XdgConfigStore};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    match cli.command {
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        Some(Commands::Daemon { action }) => {
            if let Err(e) = handle_daemon_command(action, &presenter).await {
                presenter.error(&e);
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        None => {}
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        capacity: cli.capacity,
        poll_interval: cli.poll_interval.clone(),
        surface: cli.surface.map(|s| SurfaceKind::from(s).to_string()),
        clipboard: cli.clipboard.clone(),
        hotkeys: if cli.no_hotkeys { Some(false) } else { None },
        linux: cli.keystroke_tool.clone().map(|tool| LinuxConfig {
            keystroke_tool: Some(tool),
        }),
        ..Default::default()
    };

    let config = match load_merged_config(cli_config).await {
        Ok(config) => config,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    match daemon_options(&config) {
        Ok(options) => run_daemon(options).await,
        Err(e) => {
            presenter.error(&e);
            ExitCode::from(EXIT_USAGE_ERROR)
        }
    }
}
