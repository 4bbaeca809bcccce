//! # collision-data
//!
//! Extracts per-event collision records from columnar ATLAS PHYSLITE exports and
//! writes them as a flat stream of fixed-width binary records for a downstream
//! loader.
//!
//! ## Pipeline
//!
//! 1. **Collection Reader** ([`reader`]): streams Arrow record batches of per-event
//!    particle collections out of Parquet files.
//! 2. **Event Aggregator** ([`aggregate`]): turns one event's collections into an
//!    [`EventRecord`](record::EventRecord) with outgoing composition, rest energy
//!    and efficiency.
//! 3. **Global Event Collector** ([`collector`]): walks files in order, enforcing a
//!    single event cap across all of them.
//! 4. **Binary Encoder** ([`binary`]): writes 304-byte records, reads them back and
//!    exports CSV.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use collision_data::prelude::*;
//!
//! let config = ExtractionConfig::with_event_cap(1_000);
//! let summary = extract(
//!     &["DAOD_PHYSLITE.000001.parquet", "DAOD_PHYSLITE.000002.parquet"],
//!     "collision_data.bin",
//!     &config,
//! )?;
//! println!("{}", summary);
//! # Ok::<(), collision_data::ExtractError>(())
//! ```

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod aggregate;
pub mod binary;
pub mod collector;
pub mod particles;
pub mod query;
pub mod reader;
pub mod record;
pub mod schema;

use std::path::Path;

use binary::{BinaryError, RecordFileWriter};
use collector::{CollectError, CollectionSummary, EventCollector, ExtractionConfig};

/// Errors from a full extraction run
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// Collection failed before anything was written
    #[error(transparent)]
    Collect(#[from] CollectError),

    /// Records could not be written
    #[error(transparent)]
    Binary(#[from] BinaryError),
}

/// Collect events from `files` and write them to `output` in one call.
///
/// Nothing is written at `output` unless collection succeeds.
pub fn extract<P, Q>(
    files: &[P],
    output: Q,
    config: &ExtractionConfig,
) -> Result<CollectionSummary, ExtractError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let outcome = EventCollector::new(config)?.collect(files)?;
    let mut writer = RecordFileWriter::create(output, config.layout)?;
    writer.write_records(&outcome.records)?;
    writer.finish()?;
    Ok(outcome.summary)
}

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::aggregate::{AggregatedEvent, EventAggregator, PhysicsConfig, RawEvent};
    pub use crate::binary::{
        read_record_file, write_record_file, BinaryError, Endianness, RecordFileWriter,
        RecordLayout, RecordReader, RecordWriter,
    };
    pub use crate::collector::{
        CollectError, CollectionOutcome, CollectionSummary, EventCollector, ExtractionConfig,
    };
    pub use crate::particles::ParticleCategory;
    pub use crate::query::EventIndex;
    pub use crate::reader::{BatchSource, CollectionReader, ReaderConfig, ReaderError};
    pub use crate::record::EventRecord;
    pub use crate::schema::{CollectionBatchBuilder, RECORD_SIZE};
    pub use crate::{extract, ExtractError};
}
