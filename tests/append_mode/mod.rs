//! Integration tests for append vs overwrite semantics across runs.

use line_sift_rs::{Error, RunConfiguration, process};
use tempfile::TempDir;

use crate::{output_content, write_input};

fn run(config: &RunConfiguration) {
    let summary = process(config, |e: Error| panic!("unexpected error: {e}"));
    assert!(summary.is_success());
}

#[test]
fn append_mode_doubles_the_lines_on_a_second_run() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "input.txt", "1\n2.5\nx\n");

    let config = RunConfiguration::new([input])
        .unwrap()
        .with_output_dir(dir.path())
        .with_append(true);

    run(&config);
    run(&config);

    assert_eq!(output_content(dir.path(), "integers.txt"), "1\n1\n");
    assert_eq!(output_content(dir.path(), "floats.txt"), "2.5\n2.5\n");
    assert_eq!(output_content(dir.path(), "strings.txt"), "x\nx\n");
}

#[test]
fn overwrite_mode_keeps_only_the_second_runs_lines() {
    let dir = TempDir::new().unwrap();
    let first = write_input(dir.path(), "first.txt", "1\n2\n3\n");
    let second = write_input(dir.path(), "second.txt", "99\n");

    run(&RunConfiguration::new([first])
        .unwrap()
        .with_output_dir(dir.path()));
    run(&RunConfiguration::new([second])
        .unwrap()
        .with_output_dir(dir.path()));

    assert_eq!(output_content(dir.path(), "integers.txt"), "99\n");
}

#[test]
fn overwrite_only_touches_types_seen_in_the_second_run() {
    let dir = TempDir::new().unwrap();
    let first = write_input(dir.path(), "first.txt", "hello\n");
    let second = write_input(dir.path(), "second.txt", "42\n");

    run(&RunConfiguration::new([first])
        .unwrap()
        .with_output_dir(dir.path()));
    run(&RunConfiguration::new([second])
        .unwrap()
        .with_output_dir(dir.path()));

    // The strings file was not re-opened by the second run, so the first
    // run's content survives.
    assert_eq!(output_content(dir.path(), "strings.txt"), "hello\n");
    assert_eq!(output_content(dir.path(), "integers.txt"), "42\n");
}
