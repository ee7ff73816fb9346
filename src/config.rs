//! Configuration management and validation.
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! command-line overrides applied by the CLI. Every value the pipeline needs
//! (server address, credentials, timeouts, file names, normalization limits)
//! lives here rather than in globals, so tests can drive the pipeline with
//! fixture settings.

use crate::constants::{
    ANONYMOUS_PASSWORD, ANONYMOUS_USER, CONFIG_FILE_NAME, DEFAULT_CONNECT_TIMEOUT_SECS,
    DEFAULT_FTP_HOST, DEFAULT_FTP_PORT, DEFAULT_GO_OUTPUT_ROOT, DEFAULT_RUST_OUTPUT_ROOT,
    DEFAULT_SYMBOL_DIRECTORY, FILE_CREATION_MARKER, GENERATOR_NAME, MAX_SECURITY_NAME_LENGTH,
    NASDAQ_LISTED_FILE, NASDAQ_PACKAGE, OTHER_LISTED_FILE, OTHER_PACKAGE,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Top-level configuration for a generation run
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Where and how listing files are fetched
    pub transfer: TransferConfig,

    /// Symbol and security name normalization settings
    pub normalization: NormalizationConfig,

    /// Generated source settings
    pub output: OutputConfig,

    /// Listing files to process, in order
    pub sources: Vec<SourceConfig>,
}

/// Remote transfer settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TransferConfig {
    /// FTP host name
    pub host: String,

    /// FTP control port
    pub port: u16,

    /// Login user
    pub user: String,

    /// Login password
    pub password: String,

    /// Directory containing the listing files
    pub directory: String,

    /// Control connection timeout in seconds
    pub connect_timeout_secs: u64,

    /// Read listing files from this local directory instead of the FTP server
    pub input_dir: Option<PathBuf>,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_FTP_HOST.to_string(),
            port: DEFAULT_FTP_PORT,
            user: ANONYMOUS_USER.to_string(),
            password: ANONYMOUS_PASSWORD.to_string(),
            directory: DEFAULT_SYMBOL_DIRECTORY.to_string(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            input_dir: None,
        }
    }
}

impl TransferConfig {
    /// `host:port` address of the FTP server
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Connection timeout as a [`Duration`]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

/// Normalization settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NormalizationConfig {
    /// Marker identifying the trailer row
    pub trailer_marker: String,

    /// Maximum security name length in characters
    pub max_name_length: usize,

    /// Fail when numeric or timestamp cells fall back to zero values
    pub strict_coercion: bool,

    /// Let duplicate constant names through to the renderer
    pub allow_duplicates: bool,
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        Self {
            trailer_marker: FILE_CREATION_MARKER.to_string(),
            max_name_length: MAX_SECURITY_NAME_LENGTH,
            strict_coercion: false,
            allow_duplicates: false,
        }
    }
}

/// Language of the generated constants
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputLanguage {
    /// Go packages (`<root>/<package>/<package>.go`)
    #[default]
    Go,
    /// Rust modules (`<root>/<package>/mod.rs`)
    Rust,
}

impl OutputLanguage {
    /// Default output root for this language
    pub fn default_root(&self) -> &'static str {
        match self {
            OutputLanguage::Go => DEFAULT_GO_OUTPUT_ROOT,
            OutputLanguage::Rust => DEFAULT_RUST_OUTPUT_ROOT,
        }
    }
}

/// Generated source settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Output language
    pub language: OutputLanguage,

    /// Root directory for generated files; defaults per language
    pub root: Option<PathBuf>,

    /// Report destinations without writing anything
    pub dry_run: bool,
}

impl OutputConfig {
    /// Effective output root
    pub fn root(&self) -> PathBuf {
        self.root
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.language.default_root()))
    }
}

/// One listing file and the package generated from it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceConfig {
    /// Remote file name
    pub file_name: String,

    /// Package (Go) or module (Rust) name of the generated file
    pub package: String,
}

impl SourceConfig {
    pub fn new(file_name: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            package: package.into(),
        }
    }

    /// The two NASDAQ Trader symbol directory listings
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new(NASDAQ_LISTED_FILE, NASDAQ_PACKAGE),
            Self::new(OTHER_LISTED_FILE, OTHER_PACKAGE),
        ]
    }
}

impl Config {
    /// Default configuration: both NASDAQ Trader listings, Go output
    pub fn new() -> Self {
        Self {
            sources: SourceConfig::defaults(),
            ..Default::default()
        }
    }

    /// Parse a TOML document; missing sections keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(content)?;
        if config.sources.is_empty() {
            config.sources = SourceConfig::defaults();
        }
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read config file {}", path.display()),
                e,
            )
        })?;
        Self::from_toml_str(&content)
    }

    /// Default location of the user configuration file
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(GENERATOR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))
    }

    /// Load configuration from an explicit file, the default file if present,
    /// or built-in defaults
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit_path {
            debug!("Loading configuration from {}", path.display());
            return Self::from_toml_file(path);
        }

        match Self::default_config_path() {
            Ok(path) if path.exists() => {
                debug!("Loading configuration from {}", path.display());
                Self::from_toml_file(&path)
            }
            _ => Ok(Self::new()),
        }
    }

    /// Check the configuration for values the pipeline cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.sources.is_empty() {
            return Err(Error::configuration("At least one listing source is required"));
        }

        let mut packages = std::collections::HashSet::new();
        for source in &self.sources {
            if source.file_name.trim().is_empty() {
                return Err(Error::configuration("Listing file name cannot be empty"));
            }
            if !is_valid_package_name(&source.package) {
                return Err(Error::configuration(format!(
                    "Invalid package name '{}' (expected lowercase letters, digits and underscores)",
                    source.package
                )));
            }
            if !packages.insert(source.package.as_str()) {
                return Err(Error::configuration(format!(
                    "Package '{}' is generated by more than one source",
                    source.package
                )));
            }
        }

        if self.transfer.input_dir.is_none() {
            if self.transfer.host.trim().is_empty() {
                return Err(Error::configuration("FTP host cannot be empty"));
            }
            if self.transfer.connect_timeout_secs == 0 {
                return Err(Error::configuration("Connect timeout must be greater than zero"));
            }
        }

        if self.normalization.max_name_length == 0 {
            return Err(Error::configuration(
                "Maximum security name length must be greater than zero",
            ));
        }

        Ok(())
    }
}

fn is_valid_package_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() => chars
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
        _ => false,
    }
}
