use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;
use tempfile::NamedTempFile;

use super::codec::encode_record;
use super::{BinaryError, RecordLayout, WriterStats};
use crate::record::EventRecord;
use crate::schema::RECORD_SIZE;

/// Streams records into any [`Write`] sink, 304 bytes per record, no header.
pub struct RecordWriter<W: Write> {
    writer: W,
    layout: RecordLayout,
    records_written: usize,
}

impl<W: Write> RecordWriter<W> {
    /// Create a writer over `writer`
    pub fn new(writer: W, layout: RecordLayout) -> Self {
        Self {
            writer,
            layout,
            records_written: 0,
        }
    }

    /// Append one record
    pub fn write_record(&mut self, record: &EventRecord) -> Result<(), BinaryError> {
        let buf = encode_record(record, self.layout.byte_order);
        self.writer.write_all(&buf)?;
        self.records_written += 1;
        Ok(())
    }

    /// Append records in order
    pub fn write_records<'a, I>(&mut self, records: I) -> Result<(), BinaryError>
    where
        I: IntoIterator<Item = &'a EventRecord>,
    {
        for record in records {
            self.write_record(record)?;
        }
        Ok(())
    }

    /// Current statistics
    pub fn stats(&self) -> WriterStats {
        WriterStats {
            records_written: self.records_written,
            bytes_written: (self.records_written * RECORD_SIZE) as u64,
        }
    }

    /// Flush and return statistics
    pub fn finish(mut self) -> Result<WriterStats, BinaryError> {
        self.writer.flush()?;
        Ok(self.stats())
    }

    /// Flush and return the underlying sink
    pub fn finish_into_inner(mut self) -> Result<W, BinaryError> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

/// Writes a record file atomically.
///
/// Records go to a temporary file in the destination directory, which replaces
/// `path` only on [`RecordFileWriter::finish`]. Dropping the writer earlier
/// leaves any existing file at `path` untouched.
pub struct RecordFileWriter {
    inner: RecordWriter<BufWriter<NamedTempFile>>,
    target: PathBuf,
}

impl RecordFileWriter {
    /// Start writing to `path`
    pub fn create<P: AsRef<Path>>(path: P, layout: RecordLayout) -> Result<Self, BinaryError> {
        let target = path.as_ref().to_path_buf();
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;
        let temp_file = NamedTempFile::new_in(&dir)?;
        debug!(
            "Staging {} in {}",
            target.display(),
            temp_file.path().display()
        );

        Ok(Self {
            inner: RecordWriter::new(BufWriter::new(temp_file), layout),
            target,
        })
    }

    /// Destination path
    pub fn path(&self) -> &Path {
        &self.target
    }

    /// Append one record
    pub fn write_record(&mut self, record: &EventRecord) -> Result<(), BinaryError> {
        self.inner.write_record(record)
    }

    /// Append records in order
    pub fn write_records<'a, I>(&mut self, records: I) -> Result<(), BinaryError>
    where
        I: IntoIterator<Item = &'a EventRecord>,
    {
        self.inner.write_records(records)
    }

    /// Flush, sync and move the file into place
    pub fn finish(self) -> Result<WriterStats, BinaryError> {
        let stats = self.inner.stats();
        let temp_file = self
            .inner
            .finish_into_inner()?
            .into_inner()
            .map_err(|e| BinaryError::IoError(e.into_error()))?;
        temp_file.as_file().sync_all()?;
        temp_file.persist(&self.target)?;
        debug!("Persisted {} ({})", self.target.display(), stats);
        Ok(stats)
    }
}

/// Write all `records` to `path` atomically
pub fn write_record_file<P: AsRef<Path>>(
    path: P,
    records: &[EventRecord],
    layout: RecordLayout,
) -> Result<WriterStats, BinaryError> {
    let mut writer = RecordFileWriter::create(path, layout)?;
    writer.write_records(records)?;
    writer.finish()
}
