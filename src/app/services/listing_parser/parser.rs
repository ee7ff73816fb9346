//! Core delimited listing parser
//!
//! [`ListingParser::records`] reads the header, resolves the record schema
//! against it and returns a lazy iterator over the data rows.
//! [`ListingParser::parse_bytes`] drains that iterator into a
//! [`ParseResult`] with statistics.

use std::io::Read;
use tracing::{debug, info, warn};

use super::column_mapping::ColumnMapping;
use super::record_parser::{ParsedRow, decode_row};
use super::schema::Record;
use super::stats::{ParseResult, ParseStats};
use crate::constants::LISTING_DELIMITER;
use crate::{Error, Result};

/// Parser for pipe-delimited symbol directory files
#[derive(Debug, Clone)]
pub struct ListingParser {
    file_name: String,
}

impl ListingParser {
    /// Create a parser; `file_name` only labels log lines and errors
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Read the header and return an iterator over the data rows
    ///
    /// Each call reads a fresh header and resolves the schema against it.
    /// A row that cannot be read is yielded as an error and iteration carries
    /// on with the next row; an I/O error from the underlying reader is
    /// yielded once and ends the iteration.
    pub fn records<T: Record, R: Read>(&self, reader: R) -> Result<RecordIter<R, T>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(LISTING_DELIMITER)
            .has_headers(true)
            .flexible(true)
            .quoting(false)
            .from_reader(reader);

        let headers = csv_reader.headers().map_err(|e| {
            Error::decode(
                &self.file_name,
                1,
                format!("Failed to read header row: {}", e),
                Some(e),
            )
        })?;

        let mapping = ColumnMapping::for_record::<T>(headers);
        let (schema_fields, resolved, absent) = mapping.stats();
        debug!(
            "Column mapping for {}: {} schema fields, {} resolved, {} absent",
            self.file_name, schema_fields, resolved, absent
        );

        Ok(RecordIter {
            reader: csv_reader,
            mapping,
            file_name: self.file_name.clone(),
            row: csv::StringRecord::new(),
            finished: false,
        })
    }

    /// Parse a complete listing file held in memory
    ///
    /// Row read errors do not stop parsing; they are counted in the returned
    /// statistics so the caller can decide whether the file is usable.
    pub fn parse_bytes<T: Record>(&self, data: &[u8]) -> Result<ParseResult<T>> {
        info!("Parsing listing file: {} ({} bytes)", self.file_name, data.len());

        let mut stats = ParseStats::new();
        let mut records = Vec::new();

        let rows = self.records::<T, _>(data)?;
        stats.absent_columns = rows
            .mapping()
            .absent_columns()
            .into_iter()
            .map(str::to_string)
            .collect();
        if !stats.absent_columns.is_empty() {
            debug!(
                "{} has no column for: {}",
                self.file_name,
                stats.absent_columns.join(", ")
            );
        }

        for result in rows {
            stats.total_rows += 1;

            match result {
                Ok(parsed) => {
                    stats.records_parsed += 1;
                    if parsed.short {
                        stats.short_rows += 1;
                    }
                    stats.coercion_issues.extend(parsed.coercions);
                    records.push(parsed.record);
                }
                Err(e) => {
                    stats.rows_failed += 1;
                    warn!("{}", e);
                    stats.errors.push(e.to_string());
                }
            }
        }

        if stats.coercion_failures() > 0 {
            warn!(
                "{}: {} cell(s) stored as zero values after failing to decode",
                self.file_name,
                stats.coercion_failures()
            );
        }

        info!(
            "Parsed {} records from {} rows of {}",
            stats.records_parsed, stats.total_rows, self.file_name
        );

        Ok(ParseResult { records, stats })
    }
}

/// Lazy iterator over the data rows of a listing file
pub struct RecordIter<R, T: Record> {
    reader: csv::Reader<R>,
    mapping: ColumnMapping<T::Field>,
    file_name: String,
    row: csv::StringRecord,
    finished: bool,
}

impl<R, T: Record> RecordIter<R, T> {
    /// The header resolution used for every row
    pub fn mapping(&self) -> &ColumnMapping<T::Field> {
        &self.mapping
    }
}

impl<R: Read, T: Record> Iterator for RecordIter<R, T> {
    type Item = Result<ParsedRow<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.reader.read_record(&mut self.row) {
            Ok(true) => {
                let line = self.row.position().map(|p| p.line()).unwrap_or(0);
                Some(Ok(decode_row(&self.row, &self.mapping, line)))
            }
            Ok(false) => {
                self.finished = true;
                None
            }
            Err(e) => {
                // The reader cannot make progress past an I/O failure
                if e.is_io_error() {
                    self.finished = true;
                }
                let line = e.position().map(|p| p.line()).unwrap_or(0);
                Some(Err(Error::decode(
                    &self.file_name,
                    line,
                    e.to_string(),
                    Some(e),
                )))
            }
        }
    }
}
