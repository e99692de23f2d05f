//! Integration tests running the actual crate binary against files on disk:
//! test the full E2E path including CLI parsing and exit codes.

use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

fn run_binary(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_line-sift-rs"))
        .args(args)
        .output()
        .expect("failed to execute binary")
}

/// Returns the absolute path to a test fixture file in `tests/data/`.
fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

#[test]
fn mixed_fixture_with_full_statistics() {
    let out_dir = TempDir::new().unwrap();
    let input = fixture_path("mixed.txt");

    let output = run_binary(&[
        "-f",
        "-o",
        out_dir.path().to_str().unwrap(),
        "-p",
        "result_",
        input.to_str().unwrap(),
    ]);

    assert!(
        output.status.success(),
        "binary exited with non-zero status.\nstderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let integers = std::fs::read_to_string(out_dir.path().join("result_integers.txt"))
        .expect("integers output missing");
    let floats = std::fs::read_to_string(out_dir.path().join("result_floats.txt"))
        .expect("floats output missing");
    let strings = std::fs::read_to_string(out_dir.path().join("result_strings.txt"))
        .expect("strings output missing");

    assert_eq!(integers.lines().collect::<Vec<_>>(), ["42", "-7", "100"]);
    assert_eq!(floats.lines().collect::<Vec<_>>(), ["-3.14", "2.5e3"]);
    assert_eq!(
        strings.lines().collect::<Vec<_>>(),
        ["hello", "3.14.15", "NaN"]
    );

    let stdout = String::from_utf8(output.stdout).expect("binary output was not valid UTF-8");
    assert!(stdout.contains("--- statistics ---"), "stdout: {stdout}");
    assert!(stdout.contains("count: 3"), "stdout: {stdout}");
    assert!(stdout.contains("min length: 3"), "stdout: {stdout}");
    assert!(stdout.contains("max length: 7"), "stdout: {stdout}");
}

#[test]
fn conflicting_statistics_flags_are_a_configuration_error() {
    let output = run_binary(&["-s", "-f", "whatever.txt"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "stderr: {stderr}");
}

#[test]
fn no_input_files_is_a_configuration_error() {
    let output = run_binary(&[]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "stderr: {stderr}");
}

#[test]
fn missing_input_file_is_a_warning_not_a_failure() {
    let out_dir = TempDir::new().unwrap();

    let output = run_binary(&[
        "-o",
        out_dir.path().to_str().unwrap(),
        "definitely-not-there.txt",
    ]);

    assert!(
        output.status.success(),
        "a skipped file must not fail the run.\nstderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}
