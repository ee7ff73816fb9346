//! Test fixtures for listing parser testing
//!
//! Provides sample listing files in the layout of the NASDAQ Trader symbol
//! directory, plus a small record type with typed columns for exercising
//! decimal and timestamp decoding.

use crate::app::services::listing_parser::schema::{FieldSpec, FieldValue, Record};
use chrono::{DateTime, Utc};

// Test modules
mod column_mapping_tests;

/// Header and rows in the layout of `nasdaqlisted.txt`
pub fn nasdaq_listed_fixture() -> String {
    "Symbol|Security Name|Market Category|Test Issue|Financial Status|Round Lot Size|ETF|NextShares\n\
     AAA|Alpha Corp - Common Stock|Q|N|N|100|N|N\n\
     BRK.A|Berkshire Hathaway Inc. Class A|Q|N|N|1|N|N\n\
     ZVZZT|NASDAQ TEST STOCK|G|Y|N|100|N|N\n\
     File Creation Time: 0101202400:01|||||||\n"
        .to_string()
}

/// Header and rows in the layout of `otherlisted.txt`
pub fn other_listed_fixture() -> String {
    "ACT Symbol|Security Name|Exchange|CQS Symbol|ETF|Round Lot Size|Test Issue|NASDAQ Symbol\n\
     ABR$D|Arbor Realty Trust 6.375% Series D|N|ABRpD|N|100|N|ABR-D\n\
     BF.B|Brown-Forman Corporation Class B|N|BF.B|N|100|N|BF.B\n\
     SPY|SPDR S&P 500 ETF Trust|P|SPY|Y|100|N|SPY\n\
     File Creation Time: 0101202400:01|||||||\n"
        .to_string()
}

/// Fields of [`QuoteRecord`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteField {
    Symbol,
    Close,
    AsOf,
}

/// Record type with decimal and timestamp columns
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteRecord {
    pub symbol: String,
    pub close: f64,
    pub as_of: DateTime<Utc>,
}

pub static QUOTE_SCHEMA: &[FieldSpec<QuoteField>] = &[
    FieldSpec::text(QuoteField::Symbol, "Symbol"),
    FieldSpec::decimal(QuoteField::Close, "Close"),
    FieldSpec::timestamp(QuoteField::AsOf, "As Of"),
];

impl Record for QuoteRecord {
    type Field = QuoteField;

    fn schema() -> &'static [FieldSpec<QuoteField>] {
        QUOTE_SCHEMA
    }

    fn set_field(&mut self, field: QuoteField, value: FieldValue) {
        match field {
            QuoteField::Symbol => self.symbol = value.into_text(),
            QuoteField::Close => self.close = value.as_decimal().unwrap_or_default(),
            QuoteField::AsOf => self.as_of = value.as_timestamp().unwrap_or_default(),
        }
    }
}

/// Helper to build a header record from a pipe-delimited line
pub fn header(line: &str) -> csv::StringRecord {
    csv::StringRecord::from(line.split('|').collect::<Vec<_>>())
}
