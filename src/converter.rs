use csv::{ReaderBuilder, StringRecord};
use log::{debug, info};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::error::{ConvertError, Result};
use crate::record::TripRecord;

const READ_BUFFER_SIZE: usize = 32 * 1024;
const PROGRESS_INTERVAL: u64 = 100_000;

/// Outcome of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConversionSummary {
    pub records: u64,
}

/// Streams trip CSV rows into newline-delimited JSON.
#[derive(Debug, Clone)]
pub struct RecordConverter {
    pub delimiter: u8,
}

impl Default for RecordConverter {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl RecordConverter {
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Converts every row of `input` and writes one JSON line per row to `output`.
    ///
    /// The first bad row stops the run. Lines already written for earlier rows
    /// stay in `output`; nothing is written for the failing row.
    pub fn convert_stream<R: Read, W: Write>(
        &self,
        input: R,
        output: W,
    ) -> Result<ConversionSummary> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            // column count is checked against the schema, not the first row
            .flexible(true)
            .from_reader(input);

        let mut writer = output;
        let mut row = StringRecord::new();
        let mut line_buf = Vec::with_capacity(1024);
        let mut summary = ConversionSummary::default();

        loop {
            let line = reader.position().line();
            match reader.read_record(&mut row) {
                Ok(true) => {}
                Ok(false) => break,
                Err(source) => {
                    debug!("Aborting at line {}: unreadable CSV record", line);
                    return Err(ConvertError::Csv { line, source });
                }
            }

            let line = row.position().map(|p| p.line()).unwrap_or(line);
            if let Err(e) = self.encode_row(&row, line, &mut line_buf) {
                debug!("Aborting at line {}: {}", line, e);
                writer.flush()?;
                return Err(e);
            }
            writer.write_all(&line_buf)?;

            summary.records += 1;
            if summary.records % PROGRESS_INTERVAL == 0 {
                debug!("Processed {} records...", summary.records);
            }
        }

        writer.flush()?;
        info!("Conversion complete! Processed {} records.", summary.records);

        Ok(summary)
    }

    /// Parses one row and leaves its JSON line, newline included, in `buf`.
    fn encode_row(&self, row: &StringRecord, line: u64, buf: &mut Vec<u8>) -> Result<()> {
        let record = TripRecord::from_csv(row, line)?;
        buf.clear();
        serde_json::to_writer(&mut *buf, &record)
            .map_err(|source| ConvertError::Encode { line, source })?;
        buf.push(b'\n');
        Ok(())
    }
}

/// Converts with the default (comma-separated) converter.
pub fn convert_reader_to_writer<R: Read, W: Write>(
    input: R,
    output: W,
) -> Result<ConversionSummary> {
    RecordConverter::default().convert_stream(input, output)
}

/// Converts a file, or stdin when `input_path` is `None`, into a file or stdout.
pub fn convert_path(
    input_path: Option<&Path>,
    output_path: Option<&Path>,
) -> Result<ConversionSummary> {
    let input: Box<dyn Read> = match input_path {
        Some(path) => {
            info!("Reading trips from {}", path.display());
            let file = File::open(path).map_err(|source| ConvertError::Open {
                path: path.to_path_buf(),
                source,
            })?;
            Box::new(BufReader::with_capacity(READ_BUFFER_SIZE, file))
        }
        None => {
            info!("Reading trips from stdin");
            Box::new(BufReader::with_capacity(READ_BUFFER_SIZE, io::stdin().lock()))
        }
    };

    let output: Box<dyn Write> = match output_path {
        Some(path) => {
            let file = File::create(path).map_err(|source| ConvertError::Open {
                path: path.to_path_buf(),
                source,
            })?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    convert_reader_to_writer(input, output)
}
