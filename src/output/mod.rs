//! Module for routing classified lines into their per-type output files and
//! for the summary types a run produces.

use std::collections::HashMap;
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::domain::{DataType, RunConfiguration};
use crate::error::Error;


#[cfg(windows)]
const LINE_TERMINATOR: &str = "\r\n";
#[cfg(not(windows))]
const LINE_TERMINATOR: &str = "\n";

/// Routes lines to one lazily-created output channel per data type.
///
/// The first write of a type creates the output directory (recursively, if
/// absent), opens `<output_dir>/<prefix><default-name>` in append or
/// truncate mode per configuration, and caches the handle for the rest of
/// the run. Consuming [`OutputRouter::close_all`] guarantees every channel
/// is flushed exactly once.
pub(crate) struct OutputRouter {
    output_dir: PathBuf,
    prefix: String,
    append: bool,
    channels: HashMap<DataType, BufWriter<File>>,
}

impl OutputRouter {
    pub(crate) fn new(config: &RunConfiguration) -> Self {
        Self {
            output_dir: config.output_dir().to_path_buf(),
            prefix: config.prefix().to_string(),
            append: config.append_mode(),
            channels: HashMap::new(),
        }
    }

    /// Writes one line, followed by the platform line terminator, to the
    /// channel of `data_type`. Any failure here is fatal for the run.
    pub(crate) fn write_line(&mut self, data_type: DataType, line: &str) -> Result<(), Error> {
        let channel = self.channel_for(data_type)?;
        channel
            .write_all(line.as_bytes())
            .and_then(|()| channel.write_all(LINE_TERMINATOR.as_bytes()))
            .map_err(|source| Error::WriteOutput { data_type, source })
    }

    fn channel_for(&mut self, data_type: DataType) -> Result<&mut BufWriter<File>, Error> {
        if !self.channels.contains_key(&data_type) {
            let channel = self.open_channel(data_type)?;
            self.channels.insert(data_type, channel);
        }
        Ok(self
            .channels
            .get_mut(&data_type)
            .expect("presence ensured above"))
    }

    fn open_channel(&self, data_type: DataType) -> Result<BufWriter<File>, Error> {
        fs::create_dir_all(&self.output_dir).map_err(|source| Error::CreateOutputDir {
            path: self.output_dir.clone(),
            source,
        })?;

        let path = self
            .output_dir
            .join(format!("{}{}", self.prefix, data_type.default_file_name()));

        let mut options = OpenOptions::new();
        options.create(true);
        if self.append {
            options.append(true);
        } else {
            options.write(true).truncate(true);
        }

        let file = options.open(&path).map_err(|source| Error::OpenOutput {
            data_type,
            path: path.clone(),
            source,
        })?;

        tracing::debug!(file = %path.display(), %data_type, "opened output file");
        Ok(BufWriter::new(file))
    }

    /// Flushes and closes every open channel, reporting failures per channel
    /// through `on_error` without blocking the remaining channels.
    pub(crate) fn close_all(self, on_error: &mut impl FnMut(Error)) {
        for (data_type, mut channel) in self.channels {
            if let Err(source) = channel.flush() {
                on_error(Error::CloseOutput { data_type, source });
            }
        }
    }
}

/// The outcome of one run, returned (never thrown) by the pipeline.
#[derive(Debug)]
pub struct RunSummary {
    /// Per input file: what happened to it, in configured order.
    pub files: Vec<FileReport>,
    /// One rendered report per active collector, in [`DataType::ALL`] order.
    /// Empty when statistics are disabled.
    pub statistics: Vec<StatisticsReport>,
    /// The error that stopped the run early, if any.
    pub fatal: Option<Error>,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.fatal.is_none()
    }
}

/// What happened to a single input file.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Read to the end; `lines` non-empty lines were classified and written.
    Processed { lines: u64 },
    /// Missing or unreadable, skipped entirely.
    Skipped,
    /// A read error interrupted the file after `lines` written lines.
    Interrupted { lines: u64 },
    /// A fatal error stopped the run before this file was opened.
    NotReached,
}

impl fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileOutcome::Processed { lines } => write!(f, "processed ({lines} lines)"),
            FileOutcome::Skipped => write!(f, "skipped (unavailable)"),
            FileOutcome::Interrupted { lines } => {
                write!(f, "interrupted after {lines} lines")
            }
            FileOutcome::NotReached => write!(f, "not reached"),
        }
    }
}

/// A rendered statistics report for one data type.
#[derive(Debug)]
pub struct StatisticsReport {
    pub data_type: DataType,
    pub text: String,
}
