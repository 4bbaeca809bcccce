/// Errors from encoding, decoding or exporting record files
#[derive(Debug, thiserror::Error)]
pub enum BinaryError {
    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Stream is not a whole number of records
    #[error("Invalid record file: {0}")]
    InvalidFormat(String),

    /// CSV export error
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Temporary file could not replace the destination
    #[error("Failed to move record file into place: {0}")]
    PersistError(#[from] tempfile::PersistError),
}
