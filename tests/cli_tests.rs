//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary with config and runtime dirs pointed at a scratch directory
fn pasteword(scratch: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pasteword").unwrap();
    cmd.env("XDG_CONFIG_HOME", scratch.path().join("config"))
        .env("XDG_RUNTIME_DIR", scratch.path())
        .env_remove("PASTEWORD_CAPACITY")
        .env_remove("PASTEWORD_POLL_INTERVAL");
    cmd
}

#[test]
fn help_output() {
    let scratch = TempDir::new().unwrap();
    pasteword(&scratch)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("clipboard"))
        .stdout(predicate::str::contains("--capacity"))
        .stdout(predicate::str::contains("--poll-interval"))
        .stdout(predicate::str::contains("--surface"))
        .stdout(predicate::str::contains("--no-hotkeys"));
}

#[test]
fn version_output() {
    let scratch = TempDir::new().unwrap();
    pasteword(&scratch)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pasteword"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn config_path_command() {
    let scratch = TempDir::new().unwrap();
    pasteword(&scratch)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pasteword"))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_help() {
    let scratch = TempDir::new().unwrap();
    pasteword(&scratch)
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("set"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("path"));
}

#[cfg(target_os = "linux")]
#[test]
fn config_set_then_get() {
    let scratch = TempDir::new().unwrap();
    pasteword(&scratch)
        .args(["config", "set", "capacity", "25"])
        .assert()
        .success();

    pasteword(&scratch)
        .args(["config", "get", "capacity"])
        .assert()
        .success()
        .stdout("25\n");

    pasteword(&scratch)
        .args(["config", "set", "poll_interval", "1000ms"])
        .assert()
        .success();

    pasteword(&scratch)
        .args(["config", "get", "poll_interval"])
        .assert()
        .success()
        .stdout("1s\n");
}

#[cfg(target_os = "linux")]
#[test]
fn config_get_unset_value() {
    let scratch = TempDir::new().unwrap();
    pasteword(&scratch)
        .args(["config", "get", "toggle_hotkey"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(not set)"));
}

#[cfg(target_os = "linux")]
#[test]
fn config_init_twice_fails() {
    let scratch = TempDir::new().unwrap();
    pasteword(&scratch).args(["config", "init"]).assert().success();
    pasteword(&scratch)
        .args(["config", "init"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn config_list_shows_every_key() {
    let scratch = TempDir::new().unwrap();
    pasteword(&scratch)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("capacity"))
        .stdout(predicate::str::contains("paste_delay"))
        .stdout(predicate::str::contains("abort_on_focus_loss"))
        .stdout(predicate::str::contains("linux.keystroke_tool"));
}

#[test]
fn config_get_unknown_key() {
    let scratch = TempDir::new().unwrap();
    pasteword(&scratch)
        .args(["config", "get", "api_key"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown key"));
}

#[test]
fn config_set_invalid_values() {
    let scratch = TempDir::new().unwrap();
    for (key, value) in [
        ("capacity", "0"),
        ("poll_interval", "soon"),
        ("toggle_hotkey", "ctrl+ctrl"),
        ("hotkeys", "maybe"),
        ("surface", "tray"),
        ("clipboard", "xclip"),
    ] {
        pasteword(&scratch)
            .args(["config", "set", key, value])
            .assert()
            .code(1)
            .stderr(predicate::str::contains(key));
    }
}

#[test]
fn invalid_poll_interval_is_usage_error() {
    let scratch = TempDir::new().unwrap();
    pasteword(&scratch)
        .args(["--poll-interval", "fast"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("poll-interval"));
}

#[test]
fn zero_capacity_is_usage_error() {
    let scratch = TempDir::new().unwrap();
    pasteword(&scratch)
        .args(["--capacity", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("capacity"));
}

#[test]
fn invalid_env_capacity_is_an_error() {
    let scratch = TempDir::new().unwrap();
    pasteword(&scratch)
        .env("PASTEWORD_CAPACITY", "many")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("PASTEWORD_CAPACITY"));
}

#[test]
fn invalid_surface_rejected_by_parser() {
    let scratch = TempDir::new().unwrap();
    pasteword(&scratch)
        .args(["--surface", "tray"])
        .assert()
        .code(2);
}

#[cfg(unix)]
#[test]
fn daemon_command_without_daemon() {
    let scratch = TempDir::new().unwrap();
    for args in [
        vec!["daemon", "status"],
        vec!["daemon", "toggle"],
        vec!["daemon", "paste", "1"],
        vec!["daemon", "list"],
    ] {
        pasteword(&scratch)
            .args(&args)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("No daemon running"));
    }
}
