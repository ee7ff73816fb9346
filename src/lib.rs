//! Ticker Symbols Library
//!
//! A Rust library for turning the NASDAQ Trader symbol directory listings
//! (`nasdaqlisted.txt`, `otherlisted.txt`) into generated source files that
//! declare one constant per ticker symbol.
//!
//! This library provides tools for:
//! - Fetching listing files over anonymous FTP or from a local directory
//! - Parsing pipe-delimited listings through a static field schema
//! - Normalizing ticker symbols into identifier-safe constant names
//! - Rendering Go or Rust constant declarations
//! - Writing the generated files atomically

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod listing_parser;
        pub mod listing_source;
        pub mod pipeline;
        pub mod source_renderer;
        pub mod symbol_normalizer;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::ListingRecord;
pub use config::Config;

/// Result type alias for the ticker symbol generator
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for listing generation operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Fetching a listing file from its source failed
    #[error("Transfer of '{file}' failed while trying to {stage}")]
    Transfer {
        file: String,
        stage: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A single row could not be read from a listing file
    #[error("Decode error in '{file}' at line {line}: {message}")]
    Decode {
        file: String,
        line: u64,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// One or more rows of a listing file could not be read
    #[error("{count} row(s) of '{file}' could not be decoded; first: {first}")]
    DecodeFailed {
        file: String,
        count: usize,
        first: String,
    },

    /// Numeric or timestamp cells fell back to zero values (strict mode only)
    #[error("{count} cell(s) of '{file}' failed type coercion; first: {first}")]
    CoercionFailed {
        file: String,
        count: usize,
        first: String,
    },

    /// Two listings normalize to the same constant name
    #[error("Duplicate constant '{symbol}' in package '{package}' ({count} listings)")]
    DuplicateSymbol {
        package: String,
        symbol: String,
        count: usize,
    },

    /// Generated source could not be rendered
    #[error("Render error for package '{package}': {message}")]
    Render { package: String, message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a transfer error for the given file and failed stage
    pub fn transfer(
        file: impl Into<String>,
        stage: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Transfer {
            file: file.into(),
            stage: stage.into(),
            source: source.into(),
        }
    }

    /// Create a row decode error
    pub fn decode(
        file: impl Into<String>,
        line: u64,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::Decode {
            file: file.into(),
            line,
            message: message.into(),
            source,
        }
    }

    /// Create the run-level summary for rows that failed to decode
    pub fn decode_failed(file: impl Into<String>, count: usize, first: impl Into<String>) -> Self {
        Self::DecodeFailed {
            file: file.into(),
            count,
            first: first.into(),
        }
    }

    /// Create the strict-mode coercion failure summary
    pub fn coercion_failed(
        file: impl Into<String>,
        count: usize,
        first: impl Into<String>,
    ) -> Self {
        Self::CoercionFailed {
            file: file.into(),
            count,
            first: first.into(),
        }
    }

    /// Create a duplicate symbol error
    pub fn duplicate_symbol(
        package: impl Into<String>,
        symbol: impl Into<String>,
        count: usize,
    ) -> Self {
        Self::DuplicateSymbol {
            package: package.into(),
            symbol: symbol.into(),
            count,
        }
    }

    /// Create a render error
    pub fn render(package: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Render {
            package: package.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Self::Configuration {
            message: format!("Invalid TOML configuration: {}", error),
        }
    }
}
