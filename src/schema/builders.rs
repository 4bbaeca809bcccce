use std::collections::HashMap;
use std::sync::Arc;

use arrow::array::{ArrayBuilder, ArrayRef, Float32Builder, ListBuilder, UInt64Builder};
use arrow::datatypes::{DataType, Field, FieldRef, Schema, SchemaBuilder, SchemaRef};
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;

use super::columns;
use super::constants::KEY_UNIT;
use crate::particles::{ParticleCategory, CATEGORY_COUNT, CATEGORY_TABLE};

/// Item field of every per-particle list column
fn list_item_field() -> FieldRef {
    Arc::new(Field::new("item", DataType::Float32, false))
}

/// Creates a list column annotated with its physical unit
fn list_field_with_unit(name: &str, unit: &str) -> Field {
    let mut metadata = HashMap::new();
    metadata.insert(KEY_UNIT.to_string(), unit.to_string());
    Field::new(name, DataType::List(list_item_field()), true).with_metadata(metadata)
}

/// Creates the Arrow schema of a collection input file.
///
/// # Example
///
/// ```
/// use collision_data::schema::create_collection_schema;
///
/// let schema = create_collection_schema();
/// assert_eq!(schema.fields().len(), 6);
/// ```
pub fn create_collection_schema() -> Schema {
    let mut builder = SchemaBuilder::new();
    builder.push(Field::new(columns::EVENT_NUMBER, DataType::UInt64, false));
    for spec in CATEGORY_TABLE {
        builder.push(list_field_with_unit(spec.column, "MeV"));
    }
    builder.finish()
}

/// Creates the collection schema wrapped in an Arc
pub fn create_collection_schema_arc() -> SchemaRef {
    Arc::new(create_collection_schema())
}

/// Builds conforming collection record batches row by row.
///
/// Values are given in MeV: transverse momenta for the fixed-mass categories,
/// invariant masses for jets and taus.
pub struct CollectionBatchBuilder {
    schema: SchemaRef,
    event_numbers: UInt64Builder,
    collections: Vec<ListBuilder<Float32Builder>>,
}

impl CollectionBatchBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// Create a builder sized for `capacity` events
    pub fn with_capacity(capacity: usize) -> Self {
        let collections = CATEGORY_TABLE
            .iter()
            .map(|_| {
                ListBuilder::with_capacity(Float32Builder::new(), capacity)
                    .with_field(list_item_field())
            })
            .collect();

        Self {
            schema: create_collection_schema_arc(),
            event_numbers: UInt64Builder::with_capacity(capacity),
            collections,
        }
    }

    /// Append one event; `values` is indexed like [`ParticleCategory::ALL`]
    pub fn push_event(
        &mut self,
        event_number: u64,
        values: [&[f32]; CATEGORY_COUNT],
    ) -> &mut Self {
        self.event_numbers.append_value(event_number);
        for (builder, particles) in self.collections.iter_mut().zip(values) {
            builder.values().append_slice(particles);
            builder.append(true);
        }
        self
    }

    /// Append one event with a single populated category
    pub fn push_single(
        &mut self,
        event_number: u64,
        category: ParticleCategory,
        particles: &[f32],
    ) -> &mut Self {
        let mut values: [&[f32]; CATEGORY_COUNT] = [&[]; CATEGORY_COUNT];
        values[category.index()] = particles;
        self.push_event(event_number, values)
    }

    /// Number of events appended since the last `finish`
    pub fn len(&self) -> usize {
        self.event_numbers.len()
    }

    /// Whether no events are pending
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Build the pending events into a record batch and reset the builder
    pub fn finish(&mut self) -> Result<RecordBatch, ArrowError> {
        let mut arrays: Vec<ArrayRef> = Vec::with_capacity(1 + self.collections.len());
        arrays.push(Arc::new(self.event_numbers.finish()));
        for builder in &mut self.collections {
            arrays.push(Arc::new(builder.finish()));
        }
        RecordBatch::try_new(self.schema.clone(), arrays)
    }
}

impl Default for CollectionBatchBuilder {
    fn default() -> Self {
        Self::new()
    }
}
