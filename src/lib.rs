pub mod converter;
pub mod error;
pub mod record;
pub mod schema;
pub mod timestamp;
pub mod value_conversion;

// Re-export commonly used items for convenience
pub use converter::{convert_path, convert_reader_to_writer, ConversionSummary, RecordConverter};
pub use error::{ConvertError, FieldError, Result};
pub use record::TripRecord;
pub use schema::{Column, ColumnKind, COLUMN_COUNT, TRIP_SCHEMA};
pub use value_conversion::{convert_field_value, FieldValue};
