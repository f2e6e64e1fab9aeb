//! CLI failure-path tests. These never reach the network: every case
//! fails validation before the first translation request would be sent.

use std::fs;
use std::process::Output;

use assert_cmd::Command;
use tempfile::TempDir;

fn langpack_cmd() -> Command {
    let mut cmd = Command::cargo_bin("langpack").unwrap();
    cmd.env_remove("LANGPACK_ENDPOINT");
    cmd.env_remove("LANGPACK_API_KEY");
    cmd
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn missing_input_file_fails() {
    let output = langpack_cmd()
        .args([
            "--input",
            "no/such/messages.properties",
            "--lang",
            "uk",
            "--endpoint",
            "http://localhost:9",
        ])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("does not exist"));
}

#[test]
fn invalid_language_code_fails() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("messages.properties");
    fs::write(&input, "hello=Hello\n").unwrap();

    let output = langpack_cmd()
        .args([
            "--input",
            input.to_str().unwrap(),
            "--lang",
            "zz",
            "--endpoint",
            "http://localhost:9",
        ])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("ISO 639-1"));
}

#[test]
fn unsupported_extension_fails_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("notes.txt");
    fs::write(&input, "plain text").unwrap();

    let output = langpack_cmd()
        .args([
            "--input",
            input.to_str().unwrap(),
            "--lang",
            "uk",
            "--endpoint",
            "http://localhost:9",
        ])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("unsupported"));
    assert!(!dir.path().join("notes_uk.txt").exists());
}

#[test]
fn endpoint_is_required() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("messages.properties");
    fs::write(&input, "hello=Hello\n").unwrap();

    let output = langpack_cmd()
        .args(["--input", input.to_str().unwrap(), "--lang", "uk"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("--endpoint"));
}

#[test]
fn help_describes_the_tool() {
    let output = langpack_cmd().arg("--help").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--input"));
    assert!(stdout.contains("--lang"));
}
