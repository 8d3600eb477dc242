//! Column layout of the trip CSV.
//!
//! The table below is the single source of truth for both directions of the
//! conversion: the parser reads cell `i` using `TRIP_SCHEMA[i]`, and the JSON
//! encoder emits keys by walking the same table in order.

use std::fmt;

/// Number of columns every input row must have.
pub const COLUMN_COUNT: usize = 51;

/// How the text of a cell is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Copied verbatim.
    Text,
    /// Base-10 signed 64-bit integer.
    Integer,
    /// 64-bit float.
    Float,
    /// `YYYY-MM-DD HH:MM:SS`, no timezone.
    Timestamp,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKind::Text => write!(f, "text"),
            ColumnKind::Integer => write!(f, "integer"),
            ColumnKind::Float => write!(f, "float"),
            ColumnKind::Timestamp => write!(f, "timestamp"),
        }
    }
}

/// One entry of the schema table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Position in the CSV row.
    pub index: usize,
    /// Key used in the JSON output.
    pub name: &'static str,
    pub kind: ColumnKind,
    /// Empty cell becomes `null` instead of a parse error.
    pub nullable: bool,
}

impl Column {
    const fn new(index: usize, name: &'static str, kind: ColumnKind, nullable: bool) -> Self {
        Self {
            index,
            name,
            kind,
            nullable,
        }
    }

    const fn text(index: usize, name: &'static str) -> Self {
        Self::new(index, name, ColumnKind::Text, false)
    }

    const fn int(index: usize, name: &'static str) -> Self {
        Self::new(index, name, ColumnKind::Integer, false)
    }

    const fn opt_int(index: usize, name: &'static str) -> Self {
        Self::new(index, name, ColumnKind::Integer, true)
    }

    const fn float(index: usize, name: &'static str) -> Self {
        Self::new(index, name, ColumnKind::Float, false)
    }

    const fn opt_float(index: usize, name: &'static str) -> Self {
        Self::new(index, name, ColumnKind::Float, true)
    }

    const fn timestamp(index: usize, name: &'static str) -> Self {
        Self::new(index, name, ColumnKind::Timestamp, false)
    }
}

/// The trip record, in CSV column order.
pub static TRIP_SCHEMA: [Column; COLUMN_COUNT] = [
    Column::text(0, "id"),
    Column::text(1, "vendor_id"),
    Column::timestamp(2, "pickup_datetime"),
    Column::timestamp(3, "dropoff_datetime"),
    Column::text(4, "store_and_fwd_flag"),
    Column::text(5, "rate_code_id"),
    Column::opt_float(6, "pickup_longitude"),
    Column::opt_float(7, "pickup_latitude"),
    Column::opt_float(8, "dropoff_longitude"),
    Column::opt_float(9, "dropoff_latitude"),
    Column::int(10, "passenger_count"),
    Column::float(11, "trip_distance"),
    Column::float(12, "fare_amount"),
    Column::float(13, "extra"),
    Column::float(14, "mta_tax"),
    Column::float(15, "tip_amount"),
    Column::float(16, "tolls_amount"),
    Column::opt_float(17, "ehail_fee"),
    Column::opt_float(18, "improvement_surcharge"),
    Column::float(19, "total_amount"),
    Column::int(20, "payment_type"),
    Column::opt_int(21, "trip_type"),
    Column::text(22, "pickup_location_id"),
    Column::text(23, "dropoff_location_id"),
    Column::text(24, "cab_type"),
    Column::float(25, "precipitation"),
    Column::float(26, "snow_depth"),
    Column::float(27, "snowfall"),
    Column::float(28, "max_temp"),
    Column::float(29, "min_temp"),
    Column::float(30, "wind"),
    Column::text(31, "pickup_nyct2010_gid"),
    Column::text(32, "pickup_ctlabel"),
    Column::text(33, "pickup_borocode"),
    Column::text(34, "pickup_boroname"),
    Column::text(35, "pickup_ct2010"),
    Column::text(36, "pickup_boroct2010"),
    Column::text(37, "pickup_cdeligibil"),
    Column::text(38, "pickup_ntacode"),
    Column::text(39, "pickup_ntaname"),
    Column::text(40, "pickup_puma"),
    Column::text(41, "dropoff_nyct2010_gid"),
    Column::text(42, "dropoff_ctlabel"),
    Column::text(43, "dropoff_borocode"),
    Column::text(44, "dropoff_boroname"),
    Column::text(45, "dropoff_ct2010"),
    Column::text(46, "dropoff_boroct2010"),
    Column::text(47, "dropoff_cdeligibil"),
    Column::text(48, "dropoff_ntacode"),
    Column::text(49, "dropoff_ntaname"),
    Column::text(50, "dropoff_puma"),
];

/// Looks up a column by its JSON key.
pub fn column_by_name(name: &str) -> Option<&'static Column> {
    TRIP_SCHEMA.iter().find(|c| c.name == name)
}
