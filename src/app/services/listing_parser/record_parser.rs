//! Individual row decoding for delimited listing files

use csv::StringRecord;
use tracing::debug;

use super::column_mapping::ColumnMapping;
use super::field_parsers::{CoercionIssue, decode_cell};
use super::schema::{DecodeKind, Record};

/// One decoded data row
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRow<T> {
    /// One-based line number in the source file
    pub line: u64,

    /// The decoded record
    pub record: T,

    /// Cells that fell back to zero values
    pub coercions: Vec<CoercionIssue>,

    /// The row ended before the last resolved column
    pub short: bool,
}

/// Decode a single row into a fresh record
///
/// Fields whose column is absent from the header, or lies beyond the end of
/// a short row, keep their default value. An empty decimal or timestamp cell
/// is treated as missing and stored as the zero value without an issue.
pub fn decode_row<T: Record>(
    row: &StringRecord,
    mapping: &ColumnMapping<T::Field>,
    line: u64,
) -> ParsedRow<T> {
    let mut record = T::default();
    let mut coercions = Vec::new();

    let short = mapping.is_short_row(row.len());
    if short {
        debug!(
            "Line {}: {} of {} cells, trailing fields keep defaults",
            line,
            row.len(),
            mapping.header_width()
        );
    }

    for resolved in mapping.present() {
        let Some(raw) = resolved.index.and_then(|index| row.get(index)) else {
            continue;
        };

        if raw.is_empty() && resolved.kind != DecodeKind::Text {
            continue;
        }

        let (value, failure) = decode_cell(raw, resolved.kind);
        if let Some(reason) = failure {
            debug!(
                "Line {}: column '{}' = '{}' stored as zero value ({})",
                line, resolved.column, raw, reason
            );
            coercions.push(CoercionIssue {
                line,
                column: resolved.column.to_string(),
                raw: raw.to_string(),
                reason,
            });
        }
        record.set_field(resolved.field, value);
    }

    ParsedRow {
        line,
        record,
        coercions,
        short,
    }
}
