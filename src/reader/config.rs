/// Configuration for reading collection files
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Number of events per record batch
    pub batch_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self { batch_size: 65536 }
    }
}
