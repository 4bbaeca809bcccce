use std::path::PathBuf;

use crate::reader::ReaderError;

/// Errors that abort a collection run
#[derive(Debug, thiserror::Error)]
pub enum CollectError {
    /// No input files were given
    #[error("No input files given; at least one collection file is required")]
    EmptyInput,

    /// Configuration values are unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A collection file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Reader {
        /// File being read
        path: PathBuf,
        /// Underlying reader error
        #[source]
        source: ReaderError,
    },
}

impl CollectError {
    pub(super) fn reader(path: impl Into<PathBuf>, source: ReaderError) -> Self {
        Self::Reader {
            path: path.into(),
            source,
        }
    }

    /// Whether this error stems from configuration rather than I/O.
    ///
    /// A missing column in an otherwise readable file counts as configuration.
    pub fn is_configuration(&self) -> bool {
        match self {
            CollectError::EmptyInput | CollectError::InvalidConfig(_) => true,
            CollectError::Reader { source, .. } => matches!(source, ReaderError::ColumnNotFound(_)),
        }
    }
}
