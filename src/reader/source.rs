use std::collections::HashMap;
use std::path::{Path, PathBuf};

use arrow::record_batch::RecordBatch;

use super::{CollectionReader, EventBatchIterator, ReaderConfig, ReaderError};

/// Opens collection files lazily, one batch stream per file.
///
/// The collector only calls [`BatchSource::open`] when it actually starts on a
/// file, so files past the event cap are never touched.
pub trait BatchSource {
    /// Batch stream of one file, in source event order
    type Batches: Iterator<Item = Result<RecordBatch, ReaderError>>;

    /// Open `path` and return its batches
    fn open(&mut self, path: &Path) -> Result<Self::Batches, ReaderError>;
}

/// Reads Parquet collection files from disk
#[derive(Debug, Clone, Default)]
pub struct ParquetSource {
    config: ReaderConfig,
}

impl ParquetSource {
    /// Create a source with the given reader configuration
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }
}

impl BatchSource for ParquetSource {
    type Batches = EventBatchIterator;

    fn open(&mut self, path: &Path) -> Result<Self::Batches, ReaderError> {
        CollectionReader::stream(path, self.config.clone())
    }
}

/// Serves pre-built batches keyed by path and records every open.
///
/// Useful when batches come from another decoder already in memory.
#[derive(Debug, Default)]
pub struct InMemorySource {
    files: HashMap<PathBuf, Vec<RecordBatch>>,
    opened: Vec<PathBuf>,
}

impl InMemorySource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the batches of one logical file
    pub fn with_file(mut self, path: impl Into<PathBuf>, batches: Vec<RecordBatch>) -> Self {
        self.files.insert(path.into(), batches);
        self
    }

    /// Paths opened so far, in order
    pub fn opened(&self) -> &[PathBuf] {
        &self.opened
    }
}

impl BatchSource for InMemorySource {
    type Batches = std::vec::IntoIter<Result<RecordBatch, ReaderError>>;

    fn open(&mut self, path: &Path) -> Result<Self::Batches, ReaderError> {
        let batches = self.files.get(path).ok_or_else(|| {
            ReaderError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no batches registered for {}", path.display()),
            ))
        })?;
        self.opened.push(path.to_path_buf());
        Ok(batches.iter().cloned().map(Ok).collect::<Vec<_>>().into_iter())
    }
}
