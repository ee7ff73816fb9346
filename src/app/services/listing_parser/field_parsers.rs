//! Cell decoding utilities for delimited records
//!
//! Numeric and timestamp cells never fail a row: a cell that does not parse
//! is stored as the zero value of its kind and reported back to the caller as
//! a [`CoercionIssue`] so the failure is counted instead of lost.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use std::fmt;
use std::num::ParseFloatError;

use super::schema::{DecodeKind, FieldValue};
use crate::constants::LISTING_TIMESTAMP_FORMAT;

/// A cell that fell back to its zero value
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CoercionIssue {
    /// One-based line number of the row in the source file
    pub line: u64,
    /// Column the cell was read from
    pub column: String,
    /// Raw cell text
    pub raw: String,
    /// Why decoding failed
    pub reason: String,
}

impl fmt::Display for CoercionIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}, column '{}': '{}' ({})",
            self.line, self.column, self.raw, self.reason
        )
    }
}

/// Parse a decimal cell
pub fn parse_decimal(raw: &str) -> Result<f64, ParseFloatError> {
    raw.parse::<f64>()
}

/// Parse a timestamp cell in `YYYY-MM-DDT00:00:00Z` form
pub fn parse_timestamp(raw: &str) -> chrono::ParseResult<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(raw, LISTING_TIMESTAMP_FORMAT)?;
    Ok(date.and_time(NaiveTime::MIN).and_utc())
}

/// Decode a cell according to its kind
///
/// Returns the decoded value and, when the cell had to be replaced by the
/// zero value, the reason decoding failed.
pub fn decode_cell(raw: &str, kind: DecodeKind) -> (FieldValue, Option<String>) {
    match kind {
        DecodeKind::Text => (FieldValue::Text(raw.to_string()), None),
        DecodeKind::Decimal => match parse_decimal(raw) {
            Ok(value) => (FieldValue::Decimal(value), None),
            Err(e) => (
                FieldValue::zero(kind),
                Some(format!("invalid decimal: {}", e)),
            ),
        },
        DecodeKind::Timestamp => match parse_timestamp(raw) {
            Ok(value) => (FieldValue::Timestamp(value), None),
            Err(e) => (
                FieldValue::zero(kind),
                Some(format!("invalid timestamp: {}", e)),
            ),
        },
    }
}
