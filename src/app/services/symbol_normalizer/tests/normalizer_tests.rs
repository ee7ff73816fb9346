//! Tests for the normalization pass

use super::*;
use crate::app::services::symbol_normalizer::{NormalizeOutcome, SymbolNormalizer};
use crate::config::NormalizationConfig;

#[test]
fn test_documented_example() {
    let normalizer = SymbolNormalizer::default();

    match normalizer.normalize_record(listing("AAA", "Alpha Corp - Common Stock")) {
        NormalizeOutcome::Kept(record) => {
            assert_eq!(record.normalized_symbol, "AAA");
            assert_eq!(record.security_name, "Alpha Corp ");
            assert_eq!(record.symbol, "AAA");
        }
        other => panic!("expected record to be kept, got {:?}", other),
    }
}

#[test]
fn test_trailer_row_excluded() {
    let normalizer = SymbolNormalizer::default();

    assert_eq!(
        normalizer.normalize_record(listing("File Creation Time: 20240101", "")),
        NormalizeOutcome::Trailer
    );

    let result = normalizer.normalize(vec![
        listing("AAA", "Alpha"),
        listing("File Creation Time: 0101202400:01", ""),
    ]);
    assert_eq!(result.listing_count(), 1);
    assert_eq!(result.stats.trailer_rows, 1);
}

#[test]
fn test_other_listed_trailer_dropped_as_empty_symbol() {
    // In otherlisted.txt the marker sits in the ACT Symbol column and the
    // trailer has no NASDAQ symbol, so the record ends up without a symbol
    let normalizer = SymbolNormalizer::default();
    let trailer = other_listing("File Creation Time: 0101202400:01", "", "");

    assert_eq!(
        normalizer.normalize_record(trailer),
        NormalizeOutcome::EmptySymbol
    );
}

#[test]
fn test_connectivity_symbol_becomes_canonical() {
    let normalizer = SymbolNormalizer::default();
    let result = normalizer.normalize(vec![
        other_listing("ABR$D", "ABR-D", "Arbor Realty Trust 6.375% Series D"),
        ListingRecord {
            symbol: "OLD".to_string(),
            nasdaq_symbol: "NEW.A".to_string(),
            ..Default::default()
        },
    ]);

    assert_eq!(result.listings[0].symbol, "ABR-D");
    assert_eq!(result.listings[0].normalized_symbol, "ABR__D");
    assert_eq!(result.listings[0].act_symbol, "ABR$D");
    assert_eq!(result.listings[1].symbol, "NEW.A");
    assert_eq!(result.listings[1].normalized_symbol, "NEW_A");
    assert_eq!(result.stats.connectivity_substitutions, 2);
    assert_eq!(result.stats.symbols_rewritten, 2);
}

#[test]
fn test_empty_symbol_dropped() {
    let normalizer = SymbolNormalizer::default();
    let result = normalizer.normalize(vec![
        listing("", "Nameless"),
        listing("AAA", "Alpha"),
    ]);

    assert_eq!(result.listing_count(), 1);
    assert_eq!(result.listings[0].symbol, "AAA");
    assert_eq!(result.stats.empty_symbols, 1);
    assert_eq!(result.stats.dropped(), 1);
    assert!(result.listings.iter().all(|l| !l.normalized_symbol.is_empty()));
}

#[test]
fn test_order_preserved_and_duplicates_kept() {
    let normalizer = SymbolNormalizer::default();
    let result = normalizer.normalize(vec![
        listing("XYZ", "First"),
        listing("MID", "Middle"),
        listing("File Creation Time", ""),
        listing("XYZ", "Second"),
    ]);

    let symbols: Vec<&str> = result
        .listings
        .iter()
        .map(|l| l.normalized_symbol.as_str())
        .collect();
    assert_eq!(symbols, vec!["XYZ", "MID", "XYZ"]);
    assert_eq!(result.listings[0].security_name, "First");
    assert_eq!(result.listings[2].security_name, "Second");
    assert_eq!(result.stats.kept, 3);
    assert_eq!(result.stats.total_input, 4);
}

#[test]
fn test_configured_limits_used() {
    let config = NormalizationConfig {
        trailer_marker: "END OF FILE".to_string(),
        max_name_length: 8,
        ..Default::default()
    };
    let normalizer = SymbolNormalizer::new(&config);

    let result = normalizer.normalize(vec![
        listing("AAA", "Alphabet Soup Holdings"),
        listing("END OF FILE", ""),
        listing("File Creation Time", "Not a trailer under this config"),
    ]);

    assert_eq!(result.listing_count(), 2);
    assert_eq!(result.listings[0].security_name, "Alphabet");
    assert_eq!(result.stats.names_truncated, 2);
    assert_eq!(result.stats.trailer_rows, 1);
}

#[test]
fn test_summary_mentions_counts() {
    let normalizer = SymbolNormalizer::default();
    let result = normalizer.normalize(vec![listing("AAA", "Alpha"), listing("", "")]);

    assert_eq!(
        result.stats.summary(),
        "1 of 2 listings kept (0 trailer, 1 without symbol), 0 symbols rewritten, 0 names truncated"
    );
}
