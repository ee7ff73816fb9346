//! Static field schemas for delimited records
//!
//! A record type declares an ordered table of `(field, column, kind)` entries.
//! The parser resolves the column names against each file's header once and
//! then decodes cells by kind; no runtime reflection is involved.

use chrono::{DateTime, Utc};

/// How a cell is decoded before it is stored on a record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodeKind {
    /// Copied verbatim
    #[default]
    Text,
    /// Floating point number; zero when the cell does not parse
    Decimal,
    /// `YYYY-MM-DDT00:00:00Z` date; the epoch when the cell does not parse
    Timestamp,
}

/// One schema entry binding a record field to a source column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec<F> {
    pub field: F,
    pub column: &'static str,
    pub kind: DecodeKind,
}

impl<F> FieldSpec<F> {
    pub const fn new(field: F, column: &'static str, kind: DecodeKind) -> Self {
        Self {
            field,
            column,
            kind,
        }
    }

    pub const fn text(field: F, column: &'static str) -> Self {
        Self::new(field, column, DecodeKind::Text)
    }

    pub const fn decimal(field: F, column: &'static str) -> Self {
        Self::new(field, column, DecodeKind::Decimal)
    }

    pub const fn timestamp(field: F, column: &'static str) -> Self {
        Self::new(field, column, DecodeKind::Timestamp)
    }
}

/// A decoded cell value
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Decimal(f64),
    Timestamp(DateTime<Utc>),
}

impl FieldValue {
    /// The zero value for a decode kind
    pub fn zero(kind: DecodeKind) -> Self {
        match kind {
            DecodeKind::Text => FieldValue::Text(String::new()),
            DecodeKind::Decimal => FieldValue::Decimal(0.0),
            DecodeKind::Timestamp => FieldValue::Timestamp(DateTime::<Utc>::default()),
        }
    }

    /// Text form of the value, formatting non-text values
    pub fn into_text(self) -> String {
        match self {
            FieldValue::Text(text) => text,
            FieldValue::Decimal(value) => value.to_string(),
            FieldValue::Timestamp(value) => value.to_rfc3339(),
        }
    }

    pub fn as_decimal(&self) -> Option<f64> {
        match self {
            FieldValue::Decimal(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            FieldValue::Timestamp(value) => Some(*value),
            _ => None,
        }
    }
}

/// A record type that can be populated from a delimited row
pub trait Record: Default {
    /// Identifier of a schema-addressable field
    type Field: Copy + std::fmt::Debug + PartialEq + 'static;

    /// The field-to-column table for this record type
    fn schema() -> &'static [FieldSpec<Self::Field>];

    /// Store a decoded value on the record
    fn set_field(&mut self, field: Self::Field, value: FieldValue);
}
