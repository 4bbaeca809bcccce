use arrow::record_batch::RecordBatch;

use super::utils::{
    get_event_number_column, get_particle_list_column, EventNumberColumn, ParticleListColumn,
};
use super::ReaderError;
use crate::aggregate::RawEvent;
use crate::particles::CATEGORY_TABLE;
use crate::schema::columns;

/// Streaming iterator over the record batches of one collection file
///
/// Batches are read on demand, so memory is bounded by `batch_size` events.
pub struct EventBatchIterator {
    inner: Box<dyn Iterator<Item = Result<RecordBatch, arrow::error::ArrowError>> + Send>,
}

impl EventBatchIterator {
    pub(crate) fn new<I>(iter: I) -> Self
    where
        I: Iterator<Item = Result<RecordBatch, arrow::error::ArrowError>> + Send + 'static,
    {
        Self {
            inner: Box::new(iter),
        }
    }
}

impl Iterator for EventBatchIterator {
    type Item = Result<RecordBatch, ReaderError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|r| r.map_err(ReaderError::from))
    }
}

/// Typed view over the collection columns of one record batch.
///
/// Columns are resolved once per batch; events are then filled by row index.
pub struct EventColumns<'a> {
    event_numbers: EventNumberColumn<'a>,
    collections: Vec<ParticleListColumn<'a>>,
}

impl<'a> EventColumns<'a> {
    /// Resolve every collection column of `batch`
    pub fn resolve(batch: &'a RecordBatch) -> Result<Self, ReaderError> {
        let event_numbers = get_event_number_column(batch, columns::EVENT_NUMBER)?;
        let collections = CATEGORY_TABLE
            .iter()
            .map(|spec| get_particle_list_column(batch, spec.column))
            .collect::<Result<Vec<_>, _>>()?;

        let rows = event_numbers.len();
        if collections.iter().any(|c| c.len() != rows) {
            return Err(ReaderError::InvalidFormat(
                "collection columns differ in length from the event number column".to_string(),
            ));
        }

        Ok(Self {
            event_numbers,
            collections,
        })
    }

    /// Number of events in the batch
    pub fn num_events(&self) -> usize {
        self.event_numbers.len()
    }

    /// Load event `idx` into `event`, reusing its buffers
    pub fn fill_event(&self, idx: usize, event: &mut RawEvent) -> Result<(), ReaderError> {
        event.clear(self.event_numbers.event_id(idx)?);
        for (spec, column) in CATEGORY_TABLE.iter().zip(&self.collections) {
            column.extend_row(idx, event.collection_mut(spec.category));
        }
        Ok(())
    }

    /// Event `idx` as a freshly allocated [`RawEvent`]
    pub fn event(&self, idx: usize) -> Result<RawEvent, ReaderError> {
        let mut event = RawEvent::default();
        self.fill_event(idx, &mut event)?;
        Ok(event)
    }
}
