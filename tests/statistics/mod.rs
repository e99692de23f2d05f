//! Integration tests for the statistics reports of a full run.

use line_sift_rs::{DataType, StatMode};

use crate::run_over;

#[test]
fn no_stats_mode_produces_no_reports() {
    let (summary, _dir) = run_over("1\nfoo\n", |c| c);
    assert!(summary.statistics.is_empty());
}

#[test]
fn short_mode_reports_counts_for_all_types() {
    let (summary, _dir) = run_over("1\n2\n3.5\nfoo\nbar\nbaz\n", |c| {
        c.with_stat_mode(StatMode::Short)
    });

    let types: Vec<DataType> = summary.statistics.iter().map(|r| r.data_type).collect();
    assert_eq!(types, DataType::ALL);

    let texts: Vec<&str> = summary.statistics.iter().map(|r| r.text.as_str()).collect();
    assert_eq!(texts, ["count: 2", "count: 1", "count: 3"]);
}

#[test]
fn full_mode_numeric_report_over_one_to_ten() {
    let input: String = (1..=10).map(|v| format!("{v}\n")).collect();
    let (summary, _dir) = run_over(&input, |c| c.with_stat_mode(StatMode::Full));

    let integers = &summary.statistics[0];
    assert_eq!(integers.data_type, DataType::Integer);
    assert_eq!(
        integers.text,
        "count: 10\nmin: 1\nmax: 10\nsum: 55\naverage: 5.50000"
    );
}

#[test]
fn full_mode_string_report() {
    let (summary, _dir) = run_over("a\nabc\nab\n", |c| c.with_stat_mode(StatMode::Full));

    let strings = &summary.statistics[2];
    assert_eq!(strings.data_type, DataType::String);
    assert_eq!(strings.text, "count: 3\nmin length: 1\nmax length: 3");
}

#[test]
fn types_absent_from_the_input_still_get_a_report() {
    let (summary, _dir) = run_over("only strings here\n", |c| {
        c.with_stat_mode(StatMode::Full)
    });

    assert_eq!(summary.statistics.len(), 3);
    assert_eq!(summary.statistics[0].text, "no data collected");
    assert_eq!(summary.statistics[1].text, "no data collected");
}

#[test]
fn statistics_cover_all_input_files_of_the_run() {
    use line_sift_rs::{Error, RunConfiguration, process};
    use tempfile::TempDir;

    use crate::write_input;

    let dir = TempDir::new().unwrap();
    let first = write_input(dir.path(), "first.txt", "1\n2\n");
    let second = write_input(dir.path(), "second.txt", "3\n4\n");

    let config = RunConfiguration::new([first, second])
        .unwrap()
        .with_output_dir(dir.path())
        .with_stat_mode(StatMode::Full);
    let summary = process(&config, |e: Error| panic!("unexpected error: {e}"));

    assert_eq!(
        summary.statistics[0].text,
        "count: 4\nmin: 1\nmax: 4\nsum: 10\naverage: 2.50000"
    );
}
