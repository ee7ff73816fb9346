//! Normalization statistics and result structures

use crate::app::models::ListingRecord;

/// Normalized listings with statistics
#[derive(Debug, Clone)]
pub struct NormalizeResult {
    /// Listings ready for rendering, in source order
    pub listings: Vec<ListingRecord>,

    /// Normalization statistics
    pub stats: NormalizeStats,
}

/// Counters collected while normalizing one listing file
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NormalizeStats {
    /// Records received from the parser
    pub total_input: usize,

    /// Records kept for rendering
    pub kept: usize,

    /// Trailer rows skipped
    pub trailer_rows: usize,

    /// Records dropped because their normalized symbol was empty
    pub empty_symbols: usize,

    /// Records whose canonical symbol came from the NASDAQ connectivity column
    pub connectivity_substitutions: usize,

    /// Records whose symbol contained punctuation that was replaced
    pub symbols_rewritten: usize,

    /// Records whose security name was shortened
    pub names_truncated: usize,
}

impl NormalizeStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records removed for any reason
    pub fn dropped(&self) -> usize {
        self.trailer_rows + self.empty_symbols
    }

    /// One-line summary for logs
    pub fn summary(&self) -> String {
        format!(
            "{} of {} listings kept ({} trailer, {} without symbol), {} symbols rewritten, {} names truncated",
            self.kept,
            self.total_input,
            self.trailer_rows,
            self.empty_symbols,
            self.symbols_rewritten,
            self.names_truncated
        )
    }
}

impl NormalizeResult {
    pub fn listing_count(&self) -> usize {
        self.listings.len()
    }
}
