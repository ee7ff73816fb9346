//! Duplicate constant name detection
//!
//! Normalization keeps every row, so two listings can end up with the same
//! normalized symbol. Generated sources declare one constant per listing and
//! would not compile with a repeated name; the pipeline uses this module to
//! find such collisions before rendering.

use std::collections::HashMap;

use crate::app::models::ListingRecord;

/// A normalized symbol shared by more than one listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateSymbol {
    /// The repeated normalized symbol
    pub symbol: String,
    /// Positions of the listings carrying it, in source order
    pub positions: Vec<usize>,
}

impl DuplicateSymbol {
    pub fn count(&self) -> usize {
        self.positions.len()
    }
}

/// Find normalized symbols used by more than one listing
///
/// Results are ordered by the first occurrence of each symbol.
pub fn find_duplicate_symbols(listings: &[ListingRecord]) -> Vec<DuplicateSymbol> {
    let mut positions: HashMap<&str, Vec<usize>> = HashMap::new();
    let mut order = Vec::new();

    for (index, listing) in listings.iter().enumerate() {
        let entry = positions.entry(listing.normalized_symbol.as_str()).or_default();
        if entry.is_empty() {
            order.push(listing.normalized_symbol.as_str());
        }
        entry.push(index);
    }

    order
        .into_iter()
        .filter_map(|symbol| {
            let found = positions.remove(symbol)?;
            (found.len() > 1).then(|| DuplicateSymbol {
                symbol: symbol.to_string(),
                positions: found,
            })
        })
        .collect()
}
