//! Tests for the command-line interface.
//!
//! These run the built binary with `HOME` pointed at an empty directory so a
//! user configuration file cannot leak into the results.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::tempdir;

const SINGLE_PAD: &str = r#"(pad 1 thru_hole oval (at 10 10 0) (size 1.5 2) (drill oval 0.8 1.2) (layers *.Cu *.Mask) (net 1 "GND"))"#;

fn run(home: &Path, args: &[&str], stdin: &str) -> Output {
    run_bytes(home, args, stdin.as_bytes())
}

fn run_bytes(home: &Path, args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_plated-slot-converter"))
        .args(args)
        .env("HOME", home)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn binary");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin)
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for binary")
}

#[test]
fn test_help_prints_usage_line() {
    let home = tempdir().expect("Failed to create temp dir");
    let output = run(home.path(), &["-h"], "");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim().lines().count(), 1);
    assert!(stdout.starts_with("Usage: plated-slot-converter"));
}

#[test]
fn test_stdin_to_stdout() {
    let home = tempdir().expect("Failed to create temp dir");
    let input = format!("(module X\n  {SINGLE_PAD}\n)\n");
    let output = run(home.path(), &[], &input);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("stdout is UTF-8");
    assert!(stdout.starts_with("(module X\n  (pad 1 smd oval (at 10 10 0)"));
    assert_eq!(stdout.matches("(layer Edge.Cuts)").count(), 4);
    assert!(stdout.ends_with("\n\n)\n"));
}

#[test]
fn test_pass_through_is_byte_identical() {
    let home = tempdir().expect("Failed to create temp dir");
    let input = "(kicad_pcb (version 20171130)\r\n  (net 0 \"\")\r\n)\r\n";
    let output = run(home.path(), &[], input);

    assert!(output.status.success());
    assert_eq!(output.stdout, input.as_bytes());
}

#[test]
fn test_validation_failure_writes_nothing() {
    let home = tempdir().expect("Failed to create temp dir");
    let input = SINGLE_PAD.replace("(at 10 10 0)", "(at 10 10 45)");
    let output = run(home.path(), &[], &input);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("rotation 45"));
}

#[test]
fn test_invalid_utf8_input_rejected() {
    let home = tempdir().expect("Failed to create temp dir");
    let output = run_bytes(home.path(), &[], b"(pad \xff");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read <stdin>"));
}

#[test]
fn test_file_input_and_output() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input_path = dir.path().join("board.kicad_pcb");
    let output_path = dir.path().join("board-fab.kicad_pcb");
    fs::write(&input_path, SINGLE_PAD).expect("Failed to write input");

    let output = run(
        dir.path(),
        &[
            input_path.to_str().unwrap(),
            "-o",
            output_path.to_str().unwrap(),
        ],
        "",
    );

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let written = fs::read_to_string(&output_path).expect("Failed to read output");
    assert_eq!(written.lines().count(), 6);
}

#[test]
fn test_list_mode() {
    let home = tempdir().expect("Failed to create temp dir");
    let output = run(home.path(), &["--list"], SINGLE_PAD);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        "pad 1 at (10, 10) rot 0: drill 0.8 x 1.2 -> Vertical slot 0.8 x 1.2, net 1 \"GND\"\n"
    );
}

#[test]
fn test_config_file_applied() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config_path = dir.path().join("fab.json");
    fs::write(&config_path, r#"{ "slot": { "min_width": 1.0 } }"#).expect("Failed to write config");

    let output = run(
        dir.path(),
        &["--config", config_path.to_str().unwrap()],
        SINGLE_PAD,
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("minimum slot width"));
}

#[test]
fn test_missing_config_file_fails() {
    let home = tempdir().expect("Failed to create temp dir");
    let output = run(home.path(), &["--config", "/nonexistent/fab.json"], "");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("configuration file not found"));
}
