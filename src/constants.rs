//! Application constants for the ticker symbol generator
//!
//! This module contains the default values used to build [`crate::Config`].
//! Nothing outside the configuration layer reads them directly; the pipeline
//! always receives its settings through the configuration structs.

// =============================================================================
// Symbol Directory Transfer
// =============================================================================

/// NASDAQ Trader FTP host
pub const DEFAULT_FTP_HOST: &str = "ftp.nasdaqtrader.com";

/// NASDAQ Trader FTP control port
pub const DEFAULT_FTP_PORT: u16 = 21;

/// Remote directory holding the listing files
pub const DEFAULT_SYMBOL_DIRECTORY: &str = "SymbolDirectory";

/// Anonymous login user
pub const ANONYMOUS_USER: &str = "anonymous";

/// Anonymous login password (conventionally a contact address)
pub const ANONYMOUS_PASSWORD: &str = "gitlab.com/brokerage-api/ticker-symbols";

/// Connection timeout for the FTP control connection
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 60;

// =============================================================================
// Listing Files
// =============================================================================

/// Listings of securities traded on NASDAQ
pub const NASDAQ_LISTED_FILE: &str = "nasdaqlisted.txt";

/// Listings of securities traded on other exchanges
pub const OTHER_LISTED_FILE: &str = "otherlisted.txt";

/// Package generated from [`NASDAQ_LISTED_FILE`]
pub const NASDAQ_PACKAGE: &str = "nasdaq";

/// Package generated from [`OTHER_LISTED_FILE`]
pub const OTHER_PACKAGE: &str = "other";

/// Cell delimiter used by every listing file
pub const LISTING_DELIMITER: u8 = b'|';

/// Text found in the symbol column of the trailer row
pub const FILE_CREATION_MARKER: &str = "File Creation Time";

// =============================================================================
// Normalization
// =============================================================================

/// Maximum number of characters kept from a security name
pub const MAX_SECURITY_NAME_LENGTH: usize = 40;

/// Punctuation replaced in normalized symbols.
///
/// Each character maps to a run of underscores one longer than the previous
/// entry, so no two substitutions produce the same run.
pub const SYMBOL_SUBSTITUTIONS: &[(char, &str)] = &[
    ('.', "_"),
    ('-', "__"),
    ('+', "___"),
    ('$', "____"),
    ('=', "_____"),
    ('^', "______"),
    ('#', "_______"),
];

/// Layout of timestamp cells (a date followed by a literal midnight suffix)
pub const LISTING_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT00:00:00Z";

// =============================================================================
// Output
// =============================================================================

/// Root directory for generated Go packages
pub const DEFAULT_GO_OUTPUT_ROOT: &str = "go";

/// Root directory for generated Rust modules
pub const DEFAULT_RUST_OUTPUT_ROOT: &str = "rust";

/// Name of the tool as written into generated file headers
pub const GENERATOR_NAME: &str = "ticker-symbols";

/// Default configuration file name inside the user config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";
