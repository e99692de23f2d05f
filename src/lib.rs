mod domain;
mod engine;
mod error;
mod input;
mod output;
mod stats;
mod telemetry;

pub use domain::{DataType, RunConfiguration, StatMode};
pub use error::Error;
pub use output::{FileOutcome, FileReport, RunSummary, StatisticsReport};
pub use telemetry::setup_logging;

/// Runs the filtering pipeline over the configured input files and returns the run summary.
///
/// This is the single public entry point of the crate. Each non-empty line of each input
/// file is classified as an integer, float or string and appended to the output file of
/// its type inside the configured output directory; if a statistics mode is active, the
/// rendered per-type reports are part of the returned [`RunSummary`].
///
/// # Error handling
///
/// Not every input file may be usable: a file can be missing, unreadable, or fail
/// mid-read. Such problems are recoverable: they are reported to the caller-supplied
/// `on_error` callback and processing continues with the remaining input. A failure on
/// the output side (directory creation, opening or writing an output file) is fatal:
/// processing stops, the already-open channels are still flushed and closed, and the
/// error is carried in [`RunSummary::fatal`].
///
/// Please use the callback function to define the error handling most appropriate for
/// your use case.
///
/// # Example
///
/// ```no_run
/// use line_sift_rs::{Error, RunConfiguration, StatMode, process};
///
/// let config = RunConfiguration::new(["data/input.txt"])
///     .unwrap()
///     .with_output_dir("out")
///     .with_stat_mode(StatMode::Full);
///
/// let summary = process(&config, |e: Error| eprintln!("warning: {e}"));
/// for report in &summary.statistics {
///     println!("{}:\n{}", report.data_type, report.text);
/// }
/// ```
pub fn process(config: &RunConfiguration, on_error: impl FnMut(Error)) -> RunSummary {
    engine::Pipeline::new(config).run(on_error)
}
