//! # Binary Record Encoding
//!
//! Encodes [`EventRecord`]s into a flat stream of fixed 304-byte records with no
//! header, footer or padding between records.
//!
//! | Offset | Size | Field | Encoding |
//! |--------|------|-------|----------|
//! | 0 | 4 | `eventId` | i32 |
//! | 4 | 32 | `incomingParticles` | ASCII, space padded |
//! | 36 | 256 | `outgoingParticles` | ASCII, space padded |
//! | 292 | 4 | `kineticEnergyIn` | f32 |
//! | 296 | 4 | `restEnergyOut` | f32 |
//! | 300 | 4 | `efficiency` | f32 |
//!
//! Numeric fields use the producing machine's byte order unless a
//! [`RecordLayout`] selects little- or big-endian explicitly. A record file
//! carries no marker of its byte order; readers must be told.
//!
//! ## Example
//!
//! ```rust,no_run
//! use collision_data::binary::{read_record_file, write_record_file, RecordLayout};
//! use collision_data::record::EventRecord;
//!
//! let record = EventRecord::new(1, "electron,electron", 13000.0, 0.001022, 0.001022 / 13000.0);
//! write_record_file("collision_data.bin", &[record], RecordLayout::default())?;
//! let back = read_record_file("collision_data.bin", RecordLayout::default())?;
//! assert_eq!(back, vec![record]);
//! # Ok::<(), collision_data::binary::BinaryError>(())
//! ```
//!
//! [`EventRecord`]: crate::record::EventRecord

mod codec;
mod config;
mod export;
mod error;
mod reader;
mod stats;
mod writer;

#[cfg(test)]
mod tests;

pub use codec::{
    decode_record, encode_record, EFFICIENCY_OFFSET, INCOMING_OFFSET, KINETIC_OFFSET,
    OUTGOING_OFFSET, REST_OFFSET,
};
pub use config::{Endianness, RecordLayout};
pub use export::{default_csv_path, export_csv, write_csv};
pub use error::BinaryError;
pub use reader::{decode_records, read_record_file, RecordReader};
pub use stats::WriterStats;
pub use writer::{write_record_file, RecordFileWriter, RecordWriter};
