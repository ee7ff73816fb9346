//! Test utilities for symbol normalizer testing

use crate::app::models::ListingRecord;

mod normalizer_tests;

/// Helper to create a listing with a symbol and security name
pub fn listing(symbol: &str, security_name: &str) -> ListingRecord {
    ListingRecord {
        symbol: symbol.to_string(),
        security_name: security_name.to_string(),
        ..Default::default()
    }
}

/// Helper to create a listing from `otherlisted.txt`, which carries the
/// NASDAQ connectivity symbol instead of `Symbol`
pub fn other_listing(act_symbol: &str, nasdaq_symbol: &str, security_name: &str) -> ListingRecord {
    ListingRecord {
        act_symbol: act_symbol.to_string(),
        nasdaq_symbol: nasdaq_symbol.to_string(),
        security_name: security_name.to_string(),
        ..Default::default()
    }
}

/// Helper to create an already normalized listing
pub fn normalized(symbol: &str, normalized_symbol: &str) -> ListingRecord {
    ListingRecord {
        symbol: symbol.to_string(),
        normalized_symbol: normalized_symbol.to_string(),
        ..Default::default()
    }
}
