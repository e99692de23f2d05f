//! Module for the types describing a filtering run: the data types lines are
//! sorted into and the configuration of a single run.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::Error;

/// The type assigned to a line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Integer,
    Float,
    String,
}

impl DataType {
    /// All data types, in reporting order.
    pub const ALL: [DataType; 3] = [DataType::Integer, DataType::Float, DataType::String];

    /// The output file name used for this type when no prefix is configured.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            DataType::Integer => "integers.txt",
            DataType::Float => "floats.txt",
            DataType::String => "strings.txt",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Integer => write!(f, "integers"),
            DataType::Float => write!(f, "floats"),
            DataType::String => write!(f, "strings"),
        }
    }
}

/// How much statistics to collect during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatMode {
    /// No collectors are created; statistics interactions are skipped entirely.
    #[default]
    None,
    /// Line counts only.
    Short,
    /// Numeric min/max/sum/average for integers and floats, min/max length for strings.
    Full,
}

/// The validated configuration of a single run.
///
/// Built once before the pipeline starts and treated as read-only afterwards.
/// Input paths are unique with their first-occurrence order preserved.
#[derive(Debug, Clone)]
pub struct RunConfiguration {
    output_dir: PathBuf,
    prefix: String,
    append: bool,
    stat_mode: StatMode,
    input_files: Vec<PathBuf>,
}

impl RunConfiguration {
    /// Creates a configuration over the given input files with all optional
    /// settings at their defaults (current directory, no prefix, overwrite,
    /// no statistics). Duplicate paths are dropped, keeping the first
    /// occurrence. At least one input file is required.
    pub fn new(input_files: impl IntoIterator<Item = impl Into<PathBuf>>) -> Result<Self, Error> {
        let mut unique: Vec<PathBuf> = Vec::new();
        for path in input_files {
            let path = path.into();
            if !unique.contains(&path) {
                unique.push(path);
            }
        }

        if unique.is_empty() {
            return Err(Error::NoInputFiles);
        }

        Ok(Self {
            output_dir: PathBuf::from("."),
            prefix: String::new(),
            append: false,
            stat_mode: StatMode::None,
            input_files: unique,
        })
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_append(mut self, append: bool) -> Self {
        self.append = append;
        self
    }

    pub fn with_stat_mode(mut self, stat_mode: StatMode) -> Self {
        self.stat_mode = stat_mode;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn append_mode(&self) -> bool {
        self.append
    }

    pub fn stat_mode(&self) -> StatMode {
        self.stat_mode
    }

    pub fn input_files(&self) -> &[PathBuf] {
        &self.input_files
    }
}
