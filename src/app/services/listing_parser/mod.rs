//! Delimited parser for symbol directory listing files
//!
//! Listing files are pipe-separated UTF-8 text with a header row naming the
//! columns. Record types describe themselves through a static schema, so the
//! same parser handles `nasdaqlisted.txt`, `otherlisted.txt` and any other
//! file laid out the same way.
//!
//! ## Architecture
//!
//! - [`schema`] - Static field-to-column tables and the [`Record`] trait
//! - [`column_mapping`] - Header resolution of a schema
//! - [`field_parsers`] - Cell decoding by kind (text, decimal, timestamp)
//! - [`record_parser`] - Decoding of a single row into a record
//! - [`parser`] - Header handling and the lazy row iterator
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use ticker_symbols::ListingRecord;
//! use ticker_symbols::app::services::listing_parser::ListingParser;
//!
//! # fn example() -> ticker_symbols::Result<()> {
//! let data = b"Symbol|Security Name\nAAPL|Apple Inc. - Common Stock\n";
//! let result = ListingParser::new("nasdaqlisted.txt").parse_bytes::<ListingRecord>(data)?;
//!
//! assert_eq!(result.records[0].symbol, "AAPL");
//! assert_eq!(result.stats.records_parsed, 1);
//! # Ok(())
//! # }
//! ```

pub mod column_mapping;
pub mod field_parsers;
pub mod parser;
pub mod record_parser;
pub mod schema;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_mapping::ColumnMapping;
pub use field_parsers::CoercionIssue;
pub use parser::{ListingParser, RecordIter};
pub use record_parser::ParsedRow;
pub use schema::{DecodeKind, FieldSpec, FieldValue, Record};
pub use stats::{ParseResult, ParseStats};
