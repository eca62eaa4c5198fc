//! End-to-end tests for the `pier` binary.

#![cfg(feature = "cli")]

use assert_cmd::Command;
use std::process::{Command as StdCommand, Stdio};

fn pier() -> Command {
    let mut cmd = Command::cargo_bin("pier").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn prints_red_hello_by_default_in_term_mode() {
    let output = pier().args(["--output", "term"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "\x1b[38;5;196mHello\x1b[0m\n"
    );
}

#[test]
fn text_mode_prints_plain_line() {
    let output = pier()
        .args(["Ahoy", "--fg", "cyan", "--bold", "--output", "text"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "Ahoy\n");
}

#[test]
fn debug_mode_shows_attributes() {
    let output = pier()
        .args(["Ahoy", "--fg", "rgb(0, 0, 255)", "--underline", "--output", "term-debug"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "[fg=rgb(0, 0, 255) underline]Ahoy[/fg=rgb(0, 0, 255) underline]\n"
    );
}

#[test]
fn invalid_color_fails() {
    let output = pier().args(["--fg", "not-a-color"]).output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("not-a-color"), "stderr was: {}", stderr);
}

#[test]
fn dim_flag_emits_dim_code() {
    let output = pier()
        .args(["x", "--fg", "red", "--dim", "--output", "term"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "\x1b[31m\x1b[2mx\x1b[0m\n"
    );
}

#[test]
fn closed_stdout_exits_cleanly() {
    // Larger than a pipe buffer, so the write blocks until the reader is gone.
    let text = "x".repeat(100_000);
    let mut child = StdCommand::new(assert_cmd::cargo::cargo_bin("pier"))
        .args([text.as_str(), "--output", "term"])
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    drop(child.stdout.take());

    let output = child.wait_with_output().unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(output.status.success(), "stderr was: {}", stderr);
    assert!(!stderr.contains("panicked"), "stderr was: {}", stderr);
}
