use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use line_sift_rs::{RunConfiguration, StatMode, process, setup_logging};
use tracing::{info, warn};

/// Sorts the lines of text files into per-type output files
/// (integers, floats, strings), optionally collecting statistics.
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// Directory the output files are written to
    #[arg(short = 'o', long = "output", default_value = ".")]
    output: PathBuf,

    /// Prefix prepended to the output file names (e.g. 'result_')
    #[arg(short = 'p', long = "prefix", default_value = "")]
    prefix: String,

    /// Append to existing output files instead of overwriting them
    #[arg(short = 'a', long = "append")]
    append: bool,

    /// Collect short statistics (line counts only)
    #[arg(short = 's', long = "short-stats", conflicts_with = "full_stats")]
    short_stats: bool,

    /// Collect full statistics (min/max/sum/average for numbers, lengths for strings)
    #[arg(short = 'f', long = "full-stats")]
    full_stats: bool,

    /// Input files to process, in order; duplicates are read only once
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

fn main() -> Result<()> {
    setup_logging()?;

    let cli = Cli::parse();
    let config = build_configuration(cli)?;
    log_configuration(&config);

    let summary = process(&config, handle_run_error);

    for file in &summary.files {
        info!(file = %file.path.display(), "{}", file.outcome);
    }

    if !summary.statistics.is_empty() {
        println!("--- statistics ---");
        for report in &summary.statistics {
            println!("\n{}:\n{}", report.data_type, report.text);
        }
    }

    match summary.fatal {
        Some(error) => Err(error.into()),
        None => Ok(()),
    }
}

fn build_configuration(cli: Cli) -> Result<RunConfiguration> {
    let duplicates = {
        let mut seen = std::collections::HashSet::new();
        cli.files.iter().any(|path| !seen.insert(path))
    };
    if duplicates {
        warn!("duplicate input files will be processed only once");
    }

    let stat_mode = match (cli.short_stats, cli.full_stats) {
        (true, _) => StatMode::Short,
        (_, true) => StatMode::Full,
        _ => StatMode::None,
    };

    Ok(RunConfiguration::new(cli.files)?
        .with_output_dir(cli.output)
        .with_prefix(cli.prefix)
        .with_append(cli.append)
        .with_stat_mode(stat_mode))
}

fn log_configuration(config: &RunConfiguration) {
    info!(
        output_dir = %config.output_dir().display(),
        prefix = config.prefix(),
        append = config.append_mode(),
        stat_mode = ?config.stat_mode(),
        input_files = ?config.input_files(),
        "configuration parsed"
    );
}

// Just logs warnings here, but can be changed to do more sophisticated error
// handling, e.g., collecting the skipped files for a retry
fn handle_run_error(error: line_sift_rs::Error) {
    warn!("{error}");
}
