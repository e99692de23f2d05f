//! Module defining the errors which are exposed to the users of the crate

use std::io;
use std::path::PathBuf;

use crate::domain::DataType;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration built without any input files
    #[error("no input files were provided")]
    NoInputFiles,

    /// Input file missing or unreadable; the file is skipped
    #[error("input file '{}' does not exist or cannot be read, skipping it", path.display())]
    InputUnavailable { path: PathBuf },

    /// I/O failure while reading an input file; its remaining lines are abandoned
    #[error("failed reading '{}': {source}, abandoning the rest of the file", path.display())]
    InputRead { path: PathBuf, source: io::Error },

    /// The output directory could not be created
    #[error("failed to create output directory '{}': {source}", path.display())]
    CreateOutputDir { path: PathBuf, source: io::Error },

    /// An output file could not be opened
    #[error("failed to open output file '{}' for {data_type}: {source}", path.display())]
    OpenOutput {
        data_type: DataType,
        path: PathBuf,
        source: io::Error,
    },

    /// A classified line could not be written to its output file
    #[error("failed to write a line to the {data_type} output: {source}")]
    WriteOutput { data_type: DataType, source: io::Error },

    /// Flushing/closing an output channel failed during cleanup
    #[error("failed to close the {data_type} output: {source}")]
    CloseOutput { data_type: DataType, source: io::Error },
}

impl Error {
    /// Whether this error stops the run. Output-side failures are fatal since
    /// the run's primary deliverable can no longer be produced reliably;
    /// input-side and close-time failures are per-file/per-channel warnings.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::CreateOutputDir { .. } | Error::OpenOutput { .. } | Error::WriteOutput { .. }
        )
    }
}
