use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use super::codec::decode_record;
use super::{BinaryError, RecordLayout};
use crate::record::EventRecord;
use crate::schema::RECORD_SIZE;

fn trailing_bytes_error(len: u64) -> BinaryError {
    BinaryError::InvalidFormat(format!(
        "length {} is not a multiple of the {}-byte record size",
        len, RECORD_SIZE
    ))
}

/// Sequential reader over a record stream
pub struct RecordReader<R: Read> {
    reader: R,
    layout: RecordLayout,
    records_read: usize,
    failed: bool,
}

impl RecordReader<BufReader<File>> {
    /// Open a record file, rejecting it if its size is not a whole number of records
    pub fn open<P: AsRef<Path>>(path: P, layout: RecordLayout) -> Result<Self, BinaryError> {
        let file = File::open(path.as_ref())?;
        let len = file.metadata()?.len();
        if len % RECORD_SIZE as u64 != 0 {
            return Err(trailing_bytes_error(len));
        }
        Ok(Self::new(BufReader::new(file), layout))
    }
}

impl<R: Read> RecordReader<R> {
    /// Wrap any byte source
    pub fn new(reader: R, layout: RecordLayout) -> Self {
        Self {
            reader,
            layout,
            records_read: 0,
            failed: false,
        }
    }

    /// Records decoded so far
    pub fn records_read(&self) -> usize {
        self.records_read
    }

    /// Read the next record, `Ok(None)` at a clean end of stream
    pub fn read_record(&mut self) -> Result<Option<EventRecord>, BinaryError> {
        let mut buf = [0u8; RECORD_SIZE];
        let mut filled = 0;
        while filled < RECORD_SIZE {
            match self.reader.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }

        match filled {
            0 => Ok(None),
            RECORD_SIZE => {
                self.records_read += 1;
                Ok(Some(decode_record(&buf, self.layout.byte_order)))
            }
            partial => Err(trailing_bytes_error(
                (self.records_read * RECORD_SIZE + partial) as u64,
            )),
        }
    }

    /// Read every remaining record
    pub fn read_all(mut self) -> Result<Vec<EventRecord>, BinaryError> {
        let mut records = Vec::new();
        while let Some(record) = self.read_record()? {
            records.push(record);
        }
        Ok(records)
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = Result<EventRecord, BinaryError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let result = self.read_record().transpose();
        if matches!(result, Some(Err(_))) {
            self.failed = true;
        }
        result
    }
}

/// Decode an in-memory record stream
pub fn decode_records(bytes: &[u8], layout: RecordLayout) -> Result<Vec<EventRecord>, BinaryError> {
    if bytes.len() % RECORD_SIZE != 0 {
        return Err(trailing_bytes_error(bytes.len() as u64));
    }
    Ok(bytes
        .chunks_exact(RECORD_SIZE)
        .map(|chunk| {
            let mut buf = [0u8; RECORD_SIZE];
            buf.copy_from_slice(chunk);
            decode_record(&buf, layout.byte_order)
        })
        .collect())
}

/// Read a whole record file
pub fn read_record_file<P: AsRef<Path>>(
    path: P,
    layout: RecordLayout,
) -> Result<Vec<EventRecord>, BinaryError> {
    RecordReader::open(path, layout)?.read_all()
}
