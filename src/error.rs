//! Error types for the trip converter.

use std::io;
use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;

use thiserror::Error;

use crate::schema::ColumnKind;

/// Failure to turn a single CSV cell into a typed value.
#[derive(Debug, Error)]
pub enum FieldError {
    #[error("invalid integer")]
    Integer(#[source] ParseIntError),

    #[error("invalid number")]
    Float(#[source] ParseFloatError),

    #[error("invalid timestamp, expected YYYY-MM-DD HH:MM:SS")]
    Timestamp(#[source] chrono::ParseError),

    #[error("timestamp {0:?} does not match YYYY-MM-DD HH:MM:SS")]
    TimestampLayout(String),
}

/// Every way a conversion run can fail. All of them are fatal.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to open {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read CSV record at line {line}")]
    Csv {
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("line {line}: expected {expected} columns, found {found}")]
    ColumnCount {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: column {index} ({column}) has bad {kind} value {value:?}")]
    Field {
        line: u64,
        index: usize,
        column: &'static str,
        kind: ColumnKind,
        value: String,
        #[source]
        source: FieldError,
    },

    #[error("line {line}: failed to encode record as JSON")]
    Encode {
        line: u64,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write output")]
    Write(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
