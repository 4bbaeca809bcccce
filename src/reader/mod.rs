//! # Collection Reader
//!
//! Reads per-event particle collections from Parquet files and hands them out as a
//! lazy, ordered stream of Arrow record batches.
//!
//! ## Features
//!
//! - **Streaming Iteration**: batches are decoded on demand, `batch_size` events at a time
//! - **Column Projection**: only the event number and the five collection columns are decoded
//! - **Up-front Validation**: a missing or mistyped column fails at open, before any batch
//!
//! ## Example
//!
//! ```rust,no_run
//! use collision_data::reader::{CollectionReader, EventColumns};
//!
//! let reader = CollectionReader::open("DAOD_PHYSLITE.000001.parquet")?;
//! println!("{} events", reader.num_events());
//!
//! for batch in reader.iter_batches()? {
//!     let batch = batch?;
//!     let columns = EventColumns::resolve(&batch)?;
//!     for idx in 0..columns.num_events() {
//!         let event = columns.event(idx)?;
//!         println!("event {}: {} particles", event.event_id, event.particle_count());
//!     }
//! }
//! # Ok::<(), collision_data::reader::ReaderError>(())
//! ```

mod batches;
mod config;
mod error;
mod source;
mod utils;


pub use batches::{EventBatchIterator, EventColumns};
pub use config::ReaderConfig;
pub use error::ReaderError;
pub use source::{BatchSource, InMemorySource, ParquetSource};

use std::fs::File;
use std::path::{Path, PathBuf};

use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::{
    ArrowReaderMetadata, ArrowReaderOptions, ParquetRecordBatchReaderBuilder,
};
use parquet::arrow::ProjectionMask;

use crate::schema::{columns, validate_collection_schema};

/// Reader for one collection file
///
/// The Parquet footer is parsed once at open and shared by every batch stream.
#[derive(Debug)]
pub struct CollectionReader {
    path: PathBuf,
    config: ReaderConfig,
    metadata: ArrowReaderMetadata,
}

impl CollectionReader {
    /// Open a collection file with the default configuration
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ReaderError> {
        Self::open_with_config(path, ReaderConfig::default())
    }

    /// Open a collection file with custom configuration
    ///
    /// Reads the Parquet footer and checks every required column is present.
    pub fn open_with_config<P: AsRef<Path>>(
        path: P,
        config: ReaderConfig,
    ) -> Result<Self, ReaderError> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path)?;
        let metadata = ArrowReaderMetadata::load(&file, ArrowReaderOptions::default())?;

        validate_collection_schema(metadata.schema())?;

        Ok(Self {
            path,
            config,
            metadata,
        })
    }

    /// Path this reader was opened from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of events (rows) recorded in the file footer
    pub fn num_events(&self) -> i64 {
        self.metadata.metadata().file_metadata().num_rows()
    }

    /// Returns a streaming iterator over projected record batches, in file order
    pub fn iter_batches(&self) -> Result<EventBatchIterator, ReaderError> {
        let file = File::open(&self.path)?;
        let builder = ParquetRecordBatchReaderBuilder::new_with_metadata(file, self.metadata.clone());

        let schema = builder.schema().clone();
        let roots = columns::REQUIRED
            .iter()
            .map(|name| {
                schema
                    .index_of(name)
                    .map_err(|_| ReaderError::ColumnNotFound(name.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let mask = ProjectionMask::roots(builder.parquet_schema(), roots);

        let reader = builder
            .with_projection(mask)
            .with_batch_size(self.config.batch_size)
            .build()?;
        Ok(EventBatchIterator::new(reader))
    }

    /// Opens the file and returns its batch stream in one step
    pub fn stream<P: AsRef<Path>>(
        path: P,
        config: ReaderConfig,
    ) -> Result<EventBatchIterator, ReaderError> {
        Self::open_with_config(path, config)?.iter_batches()
    }

    /// Read all record batches from the file (eager, collects all batches)
    ///
    /// **Warning**: This loads every event into memory. Prefer `iter_batches()`.
    pub fn read_all_batches(&self) -> Result<Vec<RecordBatch>, ReaderError> {
        self.iter_batches()?.collect()
    }
}
