use chrono::NaiveDateTime;
use serde::ser::{Error as _, Serialize, Serializer};

use crate::error::FieldError;
use crate::schema::{Column, ColumnKind};
use crate::timestamp;

/// A single typed cell of a trip record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Timestamp(NaiveDateTime),
    /// Empty cell in a nullable column.
    Null,
}

impl Serialize for FieldValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            FieldValue::Text(s) => serializer.serialize_str(s),
            FieldValue::Integer(i) => serializer.serialize_i64(*i),
            FieldValue::Float(f) if f.is_finite() => serializer.serialize_f64(*f),
            // serde_json would quietly write these as null
            FieldValue::Float(f) => Err(S::Error::custom(format!(
                "{f} cannot be represented as a JSON number"
            ))),
            FieldValue::Timestamp(ts) => timestamp::serialize(ts, serializer),
            FieldValue::Null => serializer.serialize_none(),
        }
    }
}

/// Converts a CSV cell to a typed value according to its column definition
pub fn convert_field_value(field: &str, column: &Column) -> Result<FieldValue, FieldError> {
    if column.nullable && field.is_empty() {
        return Ok(FieldValue::Null);
    }

    match column.kind {
        ColumnKind::Text => Ok(FieldValue::Text(field.to_string())),
        ColumnKind::Integer => field
            .parse::<i64>()
            .map(FieldValue::Integer)
            .map_err(FieldError::Integer),
        ColumnKind::Float => field
            .parse::<f64>()
            .map(FieldValue::Float)
            .map_err(FieldError::Float),
        ColumnKind::Timestamp => timestamp::parse(field).map(FieldValue::Timestamp),
    }
}
