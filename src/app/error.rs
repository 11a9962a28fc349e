use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Run-fatal failures of the aggregation pipeline.
///
/// Per-file problems (an unreadable source file, a stat failure while
/// sorting) are absorbed by the stage that hits them and never surface here.
#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("input directory {0} does not exist")]
    InputDirMissing(PathBuf),

    #[error("input path {0} is not a directory")]
    InputDirNotADirectory(PathBuf),

    #[error("invalid filter pattern \"{pattern}\": {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed to write output file {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to resolve current directory")]
    CurrentDir(#[source] io::Error),
}
