//! One parsed row of the trip CSV.

use csv::StringRecord;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{ConvertError, Result};
use crate::schema::{column_by_name, COLUMN_COUNT, TRIP_SCHEMA};
use crate::value_conversion::{convert_field_value, FieldValue};

/// A fully typed trip record.
///
/// Values are stored in schema order, so serializing walks `TRIP_SCHEMA`
/// and the JSON keys come out in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    values: Vec<FieldValue>,
}

impl TripRecord {
    /// Builds a record from a CSV row. `line` is only used for error reporting.
    pub fn from_csv(row: &StringRecord, line: u64) -> Result<Self> {
        if row.len() != COLUMN_COUNT {
            return Err(ConvertError::ColumnCount {
                line,
                expected: COLUMN_COUNT,
                found: row.len(),
            });
        }

        let values = TRIP_SCHEMA
            .iter()
            .zip(row.iter())
            .map(|(column, field)| {
                convert_field_value(field, column).map_err(|source| ConvertError::Field {
                    line,
                    index: column.index,
                    column: column.name,
                    kind: column.kind,
                    value: field.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { values })
    }

    /// Value of the column with the given JSON key.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        column_by_name(name).and_then(|column| self.values.get(column.index))
    }

    pub fn values(&self) -> &[FieldValue] {
        &self.values
    }
}

impl Serialize for TripRecord {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (column, value) in TRIP_SCHEMA.iter().zip(&self.values) {
            map.serialize_entry(column.name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FieldError;
    use crate::schema::ColumnKind;

    const SAMPLE_ROW: &str = "1,VTS,2015-01-15 19:05:39,2015-01-15 19:23:42,N,1,-73.99,40.73,,,\
1,1.5,9.0,0.5,0.5,1.0,0.0,,0.0,11.5,\
1,,75,74,green,0.0,0.0,0.0,32.0,28.0,\
5.0,1267,168,1,Manhattan,016800,1016800,E,MN33,East Harlem South,\
3804,1828,180,1,Manhattan,018000,1018000,E,MN34,East Harlem North,\
3804";

    fn row(text: &str) -> StringRecord {
        StringRecord::from(text.split(',').collect::<Vec<_>>())
    }

    #[test]
    fn test_sample_row_parses() {
        let record = TripRecord::from_csv(&row(SAMPLE_ROW), 1).unwrap();
        assert_eq!(record.values().len(), COLUMN_COUNT);
        assert_eq!(record.get("pickup_longitude"), Some(&FieldValue::Float(-73.99)));
        assert_eq!(record.get("dropoff_longitude"), Some(&FieldValue::Null));
        assert_eq!(record.get("passenger_count"), Some(&FieldValue::Integer(1)));
        assert_eq!(record.get("trip_type"), Some(&FieldValue::Null));
        assert_eq!(
            record.get("pickup_ntaname"),
            Some(&FieldValue::Text("East Harlem South".to_string()))
        );
        assert_eq!(record.get("no_such_key"), None);
    }

    #[test]
    fn test_json_keys_in_schema_order() {
        let record = TripRecord::from_csv(&row(SAMPLE_ROW), 1).unwrap();
        let json = serde_json::to_string(&record).unwrap();

        let mut last = 0;
        for column in TRIP_SCHEMA.iter() {
            let key = format!("\"{}\":", column.name);
            let pos = json.find(&key).unwrap_or_else(|| panic!("missing {key}"));
            assert!(pos >= last, "{} is out of order", column.name);
            last = pos;
        }
        assert!(json.starts_with(r#"{"id":"1","vendor_id":"VTS","pickup_datetime":"2015-01-15 19:05:39","#));
        assert!(json.ends_with(r#""dropoff_puma":"3804"}"#));
    }

    #[test]
    fn test_json_has_exactly_schema_keys() {
        let record = TripRecord::from_csv(&row(SAMPLE_ROW), 1).unwrap();
        let value: serde_json::Value = serde_json::to_value(&record).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), COLUMN_COUNT);
        assert!(TRIP_SCHEMA.iter().all(|c| object.contains_key(c.name)));
    }

    #[test]
    fn test_wrong_column_count() {
        let short = row("1,VTS,2015-01-15 19:05:39");
        match TripRecord::from_csv(&short, 7) {
            Err(ConvertError::ColumnCount {
                line,
                expected,
                found,
            }) => {
                assert_eq!((line, expected, found), (7, 51, 3));
            }
            other => panic!("unexpected result: {other:?}"),
        }

        let long = row(&format!("{SAMPLE_ROW},extra"));
        assert!(matches!(
            TripRecord::from_csv(&long, 1),
            Err(ConvertError::ColumnCount { found: 52, .. })
        ));
    }

    #[test]
    fn test_bad_field_reports_column() {
        let bad = SAMPLE_ROW.replacen(",1,1.5,", ",abc,1.5,", 1);
        match TripRecord::from_csv(&row(&bad), 3) {
            Err(ConvertError::Field {
                line,
                index,
                column,
                kind,
                value,
                source: FieldError::Integer(_),
            }) => {
                assert_eq!(line, 3);
                assert_eq!(index, 10);
                assert_eq!(column, "passenger_count");
                assert_eq!(kind, ColumnKind::Integer);
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_bad_field_message_names_kind() {
        let bad = SAMPLE_ROW.replacen("2015-01-15 19:23:42", "2015-1-15  19:23:42", 1);
        let err = TripRecord::from_csv(&row(&bad), 2).unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"line 2: column 3 (dropoff_datetime) has bad timestamp value "2015-1-15  19:23:42""#
        );
        assert!(matches!(
            err,
            ConvertError::Field {
                source: FieldError::TimestampLayout(_),
                ..
            }
        ));
    }
}
