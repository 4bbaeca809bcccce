use crate::aggregate::PhysicsConfig;
use crate::binary::RecordLayout;
use crate::reader::ReaderConfig;
use crate::schema::DEFAULT_EVENT_CAP;

use super::CollectError;

/// Configuration for a full extraction run
#[derive(Debug, Clone)]
pub struct ExtractionConfig {
    /// Global maximum number of accepted events across all files
    pub event_cap: usize,
    /// Collection reader settings
    pub reader: ReaderConfig,
    /// Physical constants for aggregation
    pub physics: PhysicsConfig,
    /// Byte layout of the record file
    pub layout: RecordLayout,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            event_cap: DEFAULT_EVENT_CAP,
            reader: ReaderConfig::default(),
            physics: PhysicsConfig::default(),
            layout: RecordLayout::default(),
        }
    }
}

impl ExtractionConfig {
    /// Create a configuration with the given event cap and defaults elsewhere
    pub fn with_event_cap(event_cap: usize) -> Self {
        Self {
            event_cap,
            ..Default::default()
        }
    }

    /// Reject values the pipeline cannot run with
    pub fn validate(&self) -> Result<(), CollectError> {
        if self.event_cap == 0 {
            return Err(CollectError::InvalidConfig(
                "event_cap must be at least 1".to_string(),
            ));
        }
        if self.reader.batch_size == 0 {
            return Err(CollectError::InvalidConfig(
                "batch_size must be at least 1".to_string(),
            ));
        }
        self.physics.validate().map_err(CollectError::InvalidConfig)
    }
}
