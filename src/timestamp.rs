//! The `YYYY-MM-DD HH:MM:SS` timestamp literal used by pickup and dropoff.

use chrono::NaiveDateTime;
use serde::Serializer;

use crate::error::FieldError;

pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Shape of a well-formed literal, e.g. `2015-01-15 19:05:39`. `0` stands for any ASCII digit.
const LITERAL_SHAPE: &[u8; 19] = b"0000-00-00 00:00:00";

/// Parses a timestamp literal. The value is kept as naive local time.
pub fn parse(text: &str) -> Result<NaiveDateTime, FieldError> {
    // chrono tolerates signs, padding spaces and unpadded fields
    if !has_literal_shape(text.as_bytes()) {
        return Err(FieldError::TimestampLayout(text.to_string()));
    }
    NaiveDateTime::parse_from_str(text, FORMAT).map_err(FieldError::Timestamp)
}

fn has_literal_shape(bytes: &[u8]) -> bool {
    bytes.len() == LITERAL_SHAPE.len()
        && bytes
            .iter()
            .zip(LITERAL_SHAPE)
            .all(|(&b, &expected)| match expected {
                b'0' => b.is_ascii_digit(),
                sep => b == sep,
            })
}

pub fn format(value: &NaiveDateTime) -> String {
    value.format(FORMAT).to_string()
}

/// Serializes a timestamp as the literal string instead of chrono's ISO 8601 form.
pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&value.format(FORMAT))
}
