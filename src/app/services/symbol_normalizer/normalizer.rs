//! Listing normalization pipeline
//!
//! Turns parsed listing rows into records ready for rendering: trailer rows
//! are skipped, the canonical symbol is chosen, the normalized constant name
//! is derived and the security name is shortened.

use tracing::{debug, info};

use super::stats::{NormalizeResult, NormalizeStats};
use super::symbol::{needs_normalization, normalize_symbol, truncate_security_name};
use crate::app::models::ListingRecord;
use crate::config::NormalizationConfig;

/// What happened to a single record
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizeOutcome {
    /// The record is kept, with derived fields filled in
    Kept(ListingRecord),
    /// The record is the file's creation-time trailer
    Trailer,
    /// No usable symbol remained
    EmptySymbol,
}

/// Normalizer for symbol directory listings
#[derive(Debug, Clone)]
pub struct SymbolNormalizer {
    trailer_marker: String,
    max_name_length: usize,
}

impl SymbolNormalizer {
    pub fn new(config: &NormalizationConfig) -> Self {
        Self {
            trailer_marker: config.trailer_marker.clone(),
            max_name_length: config.max_name_length,
        }
    }

    /// Normalize a single record
    ///
    /// Steps, in order: skip the trailer row, prefer the NASDAQ connectivity
    /// symbol when present, derive the normalized symbol, cut the security
    /// name at its first hyphen and to the maximum length, and drop the
    /// record if the normalized symbol is empty.
    pub fn normalize_record(&self, mut record: ListingRecord) -> NormalizeOutcome {
        if record.symbol.contains(&self.trailer_marker) {
            return NormalizeOutcome::Trailer;
        }

        if !record.nasdaq_symbol.is_empty() {
            record.symbol = record.nasdaq_symbol.clone();
        }

        record.normalized_symbol = normalize_symbol(&record.symbol);
        record.security_name = truncate_security_name(&record.security_name, self.max_name_length);

        if record.normalized_symbol.is_empty() {
            return NormalizeOutcome::EmptySymbol;
        }

        NormalizeOutcome::Kept(record)
    }

    /// Normalize every record, preserving source order
    ///
    /// Dropped records are removed; nothing is reordered or deduplicated.
    pub fn normalize<I>(&self, records: I) -> NormalizeResult
    where
        I: IntoIterator<Item = ListingRecord>,
    {
        let mut stats = NormalizeStats::new();
        let mut listings = Vec::new();

        for record in records {
            stats.total_input += 1;

            let substituted = !record.nasdaq_symbol.is_empty()
                && record.nasdaq_symbol != record.symbol;
            let name_length = record.security_name.chars().count();

            match self.normalize_record(record) {
                NormalizeOutcome::Kept(listing) => {
                    if substituted {
                        stats.connectivity_substitutions += 1;
                    }
                    if needs_normalization(&listing.symbol) {
                        stats.symbols_rewritten += 1;
                    }
                    if listing.security_name.chars().count() < name_length {
                        stats.names_truncated += 1;
                    }
                    listings.push(listing);
                }
                NormalizeOutcome::Trailer => {
                    debug!("Skipping trailer row at position {}", stats.total_input);
                    stats.trailer_rows += 1;
                }
                NormalizeOutcome::EmptySymbol => {
                    debug!(
                        "Dropping record at position {}: empty symbol",
                        stats.total_input
                    );
                    stats.empty_symbols += 1;
                }
            }
        }

        stats.kept = listings.len();
        info!("Normalization: {}", stats.summary());

        NormalizeResult { listings, stats }
    }
}

impl Default for SymbolNormalizer {
    fn default() -> Self {
        Self::new(&NormalizationConfig::default())
    }
}
