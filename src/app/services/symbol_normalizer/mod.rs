//! Symbol normalization for parsed listings
//!
//! Runs after parsing and before rendering. Every kept record leaves this
//! module with a non-empty `normalized_symbol` that is safe to use as a
//! constant name, and a security name short enough for a one-line comment.
//!
//! # Architecture
//!
//! - [`normalizer`] - Per-record steps and the ordered normalization pass
//! - [`symbol`] - Symbol substitution and security name truncation
//! - [`duplicates`] - Detection of repeated normalized symbols
//! - [`stats`] - Normalization statistics and result structures
//!
//! # Example Usage
//!
//! ```rust
//! use ticker_symbols::ListingRecord;
//! use ticker_symbols::app::services::symbol_normalizer::SymbolNormalizer;
//!
//! let record = ListingRecord {
//!     symbol: "BRK.A".to_string(),
//!     security_name: "Berkshire Hathaway Inc. - Class A".to_string(),
//!     ..Default::default()
//! };
//!
//! let result = SymbolNormalizer::default().normalize(vec![record]);
//! assert_eq!(result.listings[0].normalized_symbol, "BRK_A");
//! assert_eq!(result.listings[0].security_name, "Berkshire Hathaway Inc. ");
//! ```

pub mod duplicates;
pub mod normalizer;
pub mod stats;
pub mod symbol;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use duplicates::{DuplicateSymbol, find_duplicate_symbols};
pub use normalizer::{NormalizeOutcome, SymbolNormalizer};
pub use stats::{NormalizeResult, NormalizeStats};
pub use symbol::{normalize_symbol, truncate_security_name};
