use arrow::array::{
    Array, Float32Array, Float64Array, Int32Array, Int64Array, ListArray, UInt32Array, UInt64Array,
};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;

use super::ReaderError;

/// Event number column, whatever integer width the producer chose
pub(super) enum EventNumberColumn<'a> {
    Int32(&'a Int32Array),
    Int64(&'a Int64Array),
    UInt32(&'a UInt32Array),
    UInt64(&'a UInt64Array),
}

impl EventNumberColumn<'_> {
    pub(super) fn len(&self) -> usize {
        match self {
            EventNumberColumn::Int32(a) => a.len(),
            EventNumberColumn::Int64(a) => a.len(),
            EventNumberColumn::UInt32(a) => a.len(),
            EventNumberColumn::UInt64(a) => a.len(),
        }
    }

    /// Event number at `idx` as the 32-bit signed record id
    pub(super) fn event_id(&self, idx: usize) -> Result<i32, ReaderError> {
        let null = match self {
            EventNumberColumn::Int32(a) => a.is_null(idx),
            EventNumberColumn::Int64(a) => a.is_null(idx),
            EventNumberColumn::UInt32(a) => a.is_null(idx),
            EventNumberColumn::UInt64(a) => a.is_null(idx),
        };
        if null {
            return Err(ReaderError::InvalidFormat(format!(
                "null event number at row {}",
                idx
            )));
        }

        let converted = match self {
            EventNumberColumn::Int32(a) => Ok(a.value(idx)),
            EventNumberColumn::Int64(a) => i32::try_from(a.value(idx)).map_err(|_| a.value(idx).to_string()),
            EventNumberColumn::UInt32(a) => i32::try_from(a.value(idx)).map_err(|_| a.value(idx).to_string()),
            EventNumberColumn::UInt64(a) => i32::try_from(a.value(idx)).map_err(|_| a.value(idx).to_string()),
        };
        converted.map_err(|value| {
            ReaderError::InvalidFormat(format!(
                "event number {} at row {} does not fit a 32-bit event id",
                value, idx
            ))
        })
    }
}

/// Values of a per-particle list column
pub(super) enum ListValues<'a> {
    Float32(&'a Float32Array),
    Float64(&'a Float64Array),
}

impl ListValues<'_> {
    fn value(&self, i: usize) -> f64 {
        match self {
            ListValues::Float32(a) if !a.is_null(i) => f64::from(a.value(i)),
            ListValues::Float64(a) if !a.is_null(i) => a.value(i),
            _ => 0.0,
        }
    }
}

/// A per-particle list column with its resolved item array
pub(super) struct ParticleListColumn<'a> {
    list: &'a ListArray,
    values: ListValues<'a>,
}

impl ParticleListColumn<'_> {
    pub(super) fn len(&self) -> usize {
        self.list.len()
    }

    /// Append the particles of row `idx` to `out`; a null row is an empty collection
    pub(super) fn extend_row(&self, idx: usize, out: &mut Vec<f64>) {
        if self.list.is_null(idx) {
            return;
        }
        let offsets = self.list.value_offsets();
        let start = offsets[idx] as usize;
        let end = offsets[idx + 1] as usize;
        out.extend((start..end).map(|i| self.values.value(i)));
    }
}

/// Get the event number column by name.
pub(super) fn get_event_number_column<'a>(
    batch: &'a RecordBatch,
    name: &str,
) -> Result<EventNumberColumn<'a>, ReaderError> {
    let column = batch
        .column_by_name(name)
        .ok_or_else(|| ReaderError::ColumnNotFound(name.to_string()))?;
    let any = column.as_any();

    let resolved = match column.data_type() {
        DataType::Int32 => any.downcast_ref::<Int32Array>().map(EventNumberColumn::Int32),
        DataType::Int64 => any.downcast_ref::<Int64Array>().map(EventNumberColumn::Int64),
        DataType::UInt32 => any.downcast_ref::<UInt32Array>().map(EventNumberColumn::UInt32),
        DataType::UInt64 => any.downcast_ref::<UInt64Array>().map(EventNumberColumn::UInt64),
        _ => None,
    };
    resolved.ok_or_else(|| {
        ReaderError::InvalidFormat(format!(
            "{} is not an integer column ({:?})",
            name,
            column.data_type()
        ))
    })
}

/// Get a per-particle List<Float32|Float64> column by name.
pub(super) fn get_particle_list_column<'a>(
    batch: &'a RecordBatch,
    name: &str,
) -> Result<ParticleListColumn<'a>, ReaderError> {
    let list = batch
        .column_by_name(name)
        .ok_or_else(|| ReaderError::ColumnNotFound(name.to_string()))?
        .as_any()
        .downcast_ref::<ListArray>()
        .ok_or_else(|| ReaderError::InvalidFormat(format!("{} is not List", name)))?;

    let items = list.values().as_any();
    let values = if let Some(array) = items.downcast_ref::<Float32Array>() {
        ListValues::Float32(array)
    } else if let Some(array) = items.downcast_ref::<Float64Array>() {
        ListValues::Float64(array)
    } else {
        return Err(ReaderError::InvalidFormat(format!(
            "{} items are {:?}, expected Float32 or Float64",
            name,
            list.values().data_type()
        )));
    };

    Ok(ParticleListColumn { list, values })
}
