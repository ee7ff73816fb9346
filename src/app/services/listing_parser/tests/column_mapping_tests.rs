//! Tests for header resolution

use super::{QUOTE_SCHEMA, QuoteField, header};
use crate::app::models::{LISTING_SCHEMA, ListingField};
use crate::app::services::listing_parser::ColumnMapping;
use crate::app::services::listing_parser::schema::DecodeKind;

#[test]
fn test_resolves_nasdaq_listed_header() {
    let headers = header(
        "Symbol|Security Name|Market Category|Test Issue|Financial Status|Round Lot Size|ETF|NextShares",
    );
    let mapping = ColumnMapping::resolve(LISTING_SCHEMA, &headers);

    assert_eq!(mapping.index_of(ListingField::Symbol), Some(0));
    assert_eq!(mapping.index_of(ListingField::SecurityName), Some(1));
    assert_eq!(mapping.index_of(ListingField::NextShares), Some(7));
    assert_eq!(mapping.index_of(ListingField::NasdaqSymbol), None);
    assert_eq!(mapping.index_of(ListingField::Exchange), None);
    assert_eq!(mapping.max_index(), Some(7));
    assert_eq!(mapping.header_width(), 8);
    assert_eq!(mapping.stats(), (12, 8, 4));
}

#[test]
fn test_absent_columns_listed_in_schema_order() {
    let headers = header(
        "ACT Symbol|Security Name|Exchange|CQS Symbol|ETF|Round Lot Size|Test Issue|NASDAQ Symbol",
    );
    let mapping = ColumnMapping::resolve(LISTING_SCHEMA, &headers);

    assert_eq!(
        mapping.absent_columns(),
        vec!["Symbol", "Market Category", "Financial Status", "NextShares"]
    );
    assert_eq!(mapping.index_of(ListingField::NasdaqSymbol), Some(7));
    assert_eq!(mapping.index_of(ListingField::ActSymbol), Some(0));
}

#[test]
fn test_header_cells_trimmed_and_bom_ignored() {
    let headers = header("\u{feff}Symbol | Close |As Of\r");
    let mapping = ColumnMapping::resolve(QUOTE_SCHEMA, &headers);

    assert_eq!(mapping.index_of(QuoteField::Symbol), Some(0));
    assert_eq!(mapping.index_of(QuoteField::Close), Some(1));
    assert_eq!(mapping.index_of(QuoteField::AsOf), Some(2));
}

#[test]
fn test_column_names_are_case_sensitive() {
    let headers = header("symbol|CLOSE|As Of");
    let mapping = ColumnMapping::resolve(QUOTE_SCHEMA, &headers);

    assert_eq!(mapping.index_of(QuoteField::Symbol), None);
    assert_eq!(mapping.index_of(QuoteField::Close), None);
    assert_eq!(mapping.index_of(QuoteField::AsOf), Some(2));
}

#[test]
fn test_first_duplicate_column_wins() {
    let headers = header("Symbol|Close|Symbol");
    let mapping = ColumnMapping::resolve(QUOTE_SCHEMA, &headers);

    assert_eq!(mapping.index_of(QuoteField::Symbol), Some(0));
}

#[test]
fn test_decode_kinds_carried_through() {
    let headers = header("Symbol|Close|As Of");
    let mapping = ColumnMapping::resolve(QUOTE_SCHEMA, &headers);
    let kinds: Vec<DecodeKind> = mapping.fields().iter().map(|f| f.kind).collect();

    assert_eq!(
        kinds,
        vec![DecodeKind::Text, DecodeKind::Decimal, DecodeKind::Timestamp]
    );
}

#[test]
fn test_empty_header_resolves_nothing() {
    let mapping = ColumnMapping::resolve(LISTING_SCHEMA, &csv::StringRecord::new());

    assert_eq!(mapping.present().count(), 0);
    assert_eq!(mapping.max_index(), None);
    assert_eq!(mapping.absent_columns().len(), LISTING_SCHEMA.len());
}

#[test]
fn test_short_row_detection_uses_last_resolved_column() {
    let mapping = ColumnMapping::resolve(QUOTE_SCHEMA, &header("Symbol|Ignored|Close"));

    assert_eq!(mapping.max_index(), Some(2));
    assert!(mapping.is_short_row(1));
    assert!(mapping.is_short_row(2));
    assert!(!mapping.is_short_row(3));

    let unresolved = ColumnMapping::resolve(QUOTE_SCHEMA, &header("Other"));
    assert!(!unresolved.is_short_row(0));
}
