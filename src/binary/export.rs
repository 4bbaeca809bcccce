use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;

use super::reader::read_record_file;
use super::{BinaryError, RecordLayout};
use crate::record::EventRecord;
use crate::schema::{columns, DEFAULT_CSV_FILE};

/// Write `records` as CSV with a header row.
///
/// Text fields have their padding removed; floats use six decimals.
pub fn write_csv<W: Write>(records: &[EventRecord], writer: W) -> Result<usize, BinaryError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(columns::record::ALL)?;

    for record in records {
        csv_writer.write_record([
            record.event_id.to_string(),
            record.incoming_particles.trimmed().to_string(),
            record.outgoing_particles.trimmed().to_string(),
            format!("{:.6}", record.kinetic_energy_in),
            format!("{:.6}", record.rest_energy_out),
            format!("{:.6}", record.efficiency),
        ])?;
    }

    csv_writer.flush()?;
    Ok(records.len())
}

/// Default CSV path for a record file: `all_events.csv` beside it
pub fn default_csv_path(input: &Path) -> PathBuf {
    input
        .parent()
        .map(|dir| dir.join(DEFAULT_CSV_FILE))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CSV_FILE))
}

/// Decode a record file and write it out as CSV
pub fn export_csv<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    layout: RecordLayout,
) -> Result<usize, BinaryError> {
    let records = read_record_file(input.as_ref(), layout)?;
    let file = std::fs::File::create(output.as_ref())?;
    let count = write_csv(&records, std::io::BufWriter::new(file))?;
    info!(
        "Exported {} records from {} to {}",
        count,
        input.as_ref().display(),
        output.as_ref().display()
    );
    Ok(count)
}
