//! Module for the core logic of a filtering run: reading input files,
//! classifying lines, routing them to output and feeding the collectors.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::info;

use crate::domain::{DataType, RunConfiguration, StatMode};
use crate::error::Error;
use crate::input::classify;
use crate::output::{FileOutcome, FileReport, OutputRouter, RunSummary, StatisticsReport};
use crate::stats::StatisticsCollector;

/// One filtering run: owns the output channels and the per-type collectors.
///
/// State is scoped to a single run; construct a fresh pipeline per
/// invocation to keep repeated runs independent.
pub(crate) struct Pipeline<'c> {
    config: &'c RunConfiguration,
    router: OutputRouter,
    collectors: Vec<(DataType, StatisticsCollector)>,
}

impl<'c> Pipeline<'c> {
    pub(crate) fn new(config: &'c RunConfiguration) -> Self {
        // Collectors are created eagerly so that a type which never occurs
        // in the input still renders a zero-count report.
        let collectors = DataType::ALL
            .into_iter()
            .filter_map(|data_type| {
                StatisticsCollector::for_mode(config.stat_mode(), data_type)
                    .map(|collector| (data_type, collector))
            })
            .collect();

        Self {
            config,
            router: OutputRouter::new(config),
            collectors,
        }
    }

    /// Processes every configured input file in order and returns the run
    /// summary.
    ///
    /// A missing input file or a mid-file read error is reported through
    /// `on_error` and processing continues with the next file. An output
    /// write failure is fatal: the remaining files are not processed. The
    /// cleanup phase (rendering statistics and closing every open channel)
    /// runs on the fatal path as well.
    pub(crate) fn run(mut self, mut on_error: impl FnMut(Error)) -> RunSummary {
        let mut files = Vec::with_capacity(self.config.input_files().len());
        let mut fatal = None;

        for path in self.config.input_files() {
            if fatal.is_some() {
                files.push(FileReport {
                    path: path.clone(),
                    outcome: FileOutcome::NotReached,
                });
                continue;
            }

            let (outcome, error) = self.process_file(path, &mut on_error);
            fatal = error;
            files.push(FileReport {
                path: path.clone(),
                outcome,
            });
        }

        let statistics = self.render_statistics();
        self.router.close_all(&mut on_error);

        RunSummary {
            files,
            statistics,
            fatal,
        }
    }

    /// Processes one input file. The second element of the returned pair is
    /// the fatal error that interrupted the file, if any; recoverable
    /// problems go through `on_error` instead.
    fn process_file(
        &mut self,
        path: &Path,
        on_error: &mut impl FnMut(Error),
    ) -> (FileOutcome, Option<Error>) {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(_) => {
                on_error(Error::InputUnavailable {
                    path: path.to_path_buf(),
                });
                return (FileOutcome::Skipped, None);
            }
        };

        info!(file = %path.display(), "reading input file");

        let mut written = 0u64;
        for line in BufReader::new(file).lines() {
            let line = match line {
                Ok(line) => line,
                Err(source) => {
                    on_error(Error::InputRead {
                        path: path.to_path_buf(),
                        source,
                    });
                    return (FileOutcome::Interrupted { lines: written }, None);
                }
            };

            match self.process_line(&line) {
                Ok(true) => written += 1,
                Ok(false) => {}
                Err(error) => {
                    return (FileOutcome::Interrupted { lines: written }, Some(error));
                }
            }
        }

        (FileOutcome::Processed { lines: written }, None)
    }

    /// Classifies and writes a single line; returns whether the line was
    /// written (whitespace-only lines are dropped).
    ///
    /// The collector is only updated after the write succeeded, so the
    /// statistics never count a line that failed to reach its output file.
    fn process_line(&mut self, line: &str) -> Result<bool, Error> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let data_type = classify(trimmed);
        self.router.write_line(data_type, line)?;

        if let Some((_, collector)) = self
            .collectors
            .iter_mut()
            .find(|(collector_type, _)| *collector_type == data_type)
        {
            collector.collect(line);
        }

        Ok(true)
    }

    fn render_statistics(&self) -> Vec<StatisticsReport> {
        if self.config.stat_mode() == StatMode::None {
            return Vec::new();
        }

        self.collectors
            .iter()
            .map(|(data_type, collector)| StatisticsReport {
                data_type: *data_type,
                text: collector.render(),
            })
            .collect()
    }
}
