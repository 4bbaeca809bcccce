//! # Global Event Collector
//!
//! Drives extraction across an ordered list of collection files, enforcing one
//! global event cap.
//!
//! - Files are opened lazily, in the order given; a file is never opened once the
//!   cap is reached.
//! - Within a file, batches and events are taken in source order. A batch is never
//!   pulled once the cap is reached, and a partially consumed batch is abandoned.
//! - Duplicate event numbers across files are kept as distinct records.
//!
//! ## Example
//!
//! ```rust,no_run
//! use collision_data::collector::{EventCollector, ExtractionConfig};
//!
//! let mut collector = EventCollector::new(&ExtractionConfig::default())?;
//! let outcome = collector.collect(&["DAOD_PHYSLITE.000001.parquet", "DAOD_PHYSLITE.000002.parquet"])?;
//! println!("{}", outcome.summary);
//! # Ok::<(), collision_data::collector::CollectError>(())
//! ```

mod config;
mod error;
mod summary;


pub use config::ExtractionConfig;
pub use error::CollectError;
pub use summary::{CollectionOutcome, CollectionSummary, EfficiencyWarning, FileCount};

use std::path::Path;

use chrono::Utc;
use log::{debug, info};

use crate::aggregate::{EventAggregator, RawEvent};
use crate::reader::{BatchSource, EventColumns, ParquetSource};
use crate::record::EventRecord;

/// Running totals of one collection run
#[derive(Debug, Default)]
struct Accumulator {
    records: Vec<EventRecord>,
    files: Vec<FileCount>,
    warnings: Vec<EfficiencyWarning>,
    max_efficiency: Option<f32>,
    max_rest_energy_out: Option<f32>,
}

impl Accumulator {
    fn accepted(&self) -> usize {
        self.records.len()
    }

    fn accept(&mut self, record: EventRecord, exceeds_unity: bool) {
        if exceeds_unity {
            self.warnings.push(EfficiencyWarning {
                event_id: record.event_id,
                efficiency: record.efficiency,
            });
        }
        self.max_efficiency = Some(
            self.max_efficiency
                .map_or(record.efficiency, |m| m.max(record.efficiency)),
        );
        self.max_rest_energy_out = Some(
            self.max_rest_energy_out
                .map_or(record.rest_energy_out, |m| m.max(record.rest_energy_out)),
        );
        if let Some(file) = self.files.last_mut() {
            file.events += 1;
        }
        self.records.push(record);
    }

    fn finish(self, event_cap: usize) -> CollectionOutcome {
        let total_events = self.records.len();
        CollectionOutcome {
            summary: CollectionSummary {
                files: self.files,
                total_events,
                event_cap,
                cap_reached: total_events == event_cap,
                max_efficiency: self.max_efficiency,
                max_rest_energy_out: self.max_rest_energy_out,
                warnings: self.warnings,
                completed_at: Utc::now(),
            },
            records: self.records,
        }
    }
}

/// Collects event records from many files up to a global cap
pub struct EventCollector<S: BatchSource = ParquetSource> {
    source: S,
    aggregator: EventAggregator,
    event_cap: usize,
}

impl EventCollector<ParquetSource> {
    /// Create a collector reading Parquet files from disk
    pub fn new(config: &ExtractionConfig) -> Result<Self, CollectError> {
        Self::with_source(ParquetSource::new(config.reader.clone()), config)
    }
}

impl<S: BatchSource> EventCollector<S> {
    /// Create a collector over any batch source
    pub fn with_source(source: S, config: &ExtractionConfig) -> Result<Self, CollectError> {
        config.validate()?;
        Ok(Self {
            source,
            aggregator: EventAggregator::new(config.physics.clone()),
            event_cap: config.event_cap,
        })
    }

    /// The underlying batch source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Configured event cap
    pub fn event_cap(&self) -> usize {
        self.event_cap
    }

    /// Read `files` in order until they are exhausted or the cap is reached
    pub fn collect<P: AsRef<Path>>(&mut self, files: &[P]) -> Result<CollectionOutcome, CollectError> {
        if files.is_empty() {
            return Err(CollectError::EmptyInput);
        }

        let cap = self.event_cap;
        let mut acc = Accumulator {
            records: Vec::with_capacity(cap.min(1 << 16)),
            ..Default::default()
        };
        let mut event = RawEvent::default();

        'files: for (file_index, path) in files.iter().enumerate() {
            let path = path.as_ref();
            if acc.accepted() >= cap {
                info!(
                    "Event cap {} reached; skipping {} remaining file(s)",
                    cap,
                    files.len() - file_index
                );
                break;
            }

            info!("Reading {} ({}/{})", path.display(), file_index + 1, files.len());
            let mut batches = self
                .source
                .open(path)
                .map_err(|e| CollectError::reader(path, e))?;
            acc.files.push(FileCount {
                path: path.display().to_string(),
                events: 0,
            });

            loop {
                if acc.accepted() >= cap {
                    info!("Event cap {} reached inside {}", cap, path.display());
                    break 'files;
                }
                let Some(batch) = batches.next() else {
                    break;
                };
                let batch = batch.map_err(|e| CollectError::reader(path, e))?;
                let columns =
                    EventColumns::resolve(&batch).map_err(|e| CollectError::reader(path, e))?;

                let take = columns.num_events().min(cap - acc.accepted());
                debug!(
                    "Batch of {} events from {}, taking {}",
                    columns.num_events(),
                    path.display(),
                    take
                );

                for idx in 0..take {
                    columns
                        .fill_event(idx, &mut event)
                        .map_err(|e| CollectError::reader(path, e))?;
                    let aggregated = self.aggregator.aggregate(&event);
                    acc.accept(aggregated.record, aggregated.exceeds_unity);
                }
            }

            if let Some(file) = acc.files.last() {
                info!("  {} events accepted from {}", file.events, path.display());
            }
        }

        Ok(acc.finish(cap))
    }
}
