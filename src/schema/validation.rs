use arrow::datatypes::{DataType, Schema};

use super::columns;

/// Validates that a schema carries every collection column with a usable type.
///
/// The event number may be any 32/64-bit integer; collection columns must be lists
/// of Float32 or Float64.
pub fn validate_collection_schema(schema: &Schema) -> Result<(), SchemaValidationError> {
    for name in columns::REQUIRED {
        let field = schema
            .field_with_name(name)
            .map_err(|_| SchemaValidationError::MissingColumn(name.to_string()))?;

        let accepted = if name == columns::EVENT_NUMBER {
            is_event_number_type(field.data_type())
        } else {
            is_value_list_type(field.data_type())
        };

        if !accepted {
            return Err(SchemaValidationError::TypeMismatch {
                column: name.to_string(),
                expected: if name == columns::EVENT_NUMBER {
                    "Int32, Int64, UInt32 or UInt64".to_string()
                } else {
                    "List<Float32> or List<Float64>".to_string()
                },
                found: format!("{:?}", field.data_type()),
            });
        }
    }

    Ok(())
}

fn is_event_number_type(data_type: &DataType) -> bool {
    matches!(
        data_type,
        DataType::Int32 | DataType::Int64 | DataType::UInt32 | DataType::UInt64
    )
}

fn is_value_list_type(data_type: &DataType) -> bool {
    match data_type {
        DataType::List(item) => matches!(item.data_type(), DataType::Float32 | DataType::Float64),
        _ => false,
    }
}

/// Errors that can occur during schema validation
#[derive(Debug, thiserror::Error)]
pub enum SchemaValidationError {
    /// A required column is missing from the schema
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A column has an incorrect data type
    #[error("Type mismatch for column '{column}': expected {expected}, found {found}")]
    TypeMismatch {
        /// Name of the column with the type mismatch
        column: String,
        /// Expected data type
        expected: String,
        /// Actual data type found
        found: String,
    },
}
