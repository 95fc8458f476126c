//! Error type shared by the generator, sorter and searcher.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Numeric part of a size string could not be parsed
    #[error("Invalid size format: {0}")]
    InvalidSizeFormat(String),

    /// Sizes are zero or the line does not fit into the total
    #[error("Invalid sizes (total {total}, line {line}). Ensure total_size >= line_size and both > 0.")]
    InvalidArguments { total: i64, line: i64 },

    /// File operation failed
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line compares less than the one before it
    #[error("{}: line {line} is out of order", path.display())]
    NotSorted { path: PathBuf, line: usize },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
