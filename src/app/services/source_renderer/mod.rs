//! Generated source rendering
//!
//! Renderers turn normalized listings into the text of one generated source
//! file: a do-not-edit header with the generation timestamp, then one named
//! constant per listing bound to its canonical symbol, with the security name
//! as an adjacent comment.
//!
//! - [`go`] - Go packages (the default)
//! - [`rust`] - Rust modules

pub mod go;
pub mod rust;

use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt::Debug;
use std::path::{Path, PathBuf};

use crate::app::models::ListingRecord;
use crate::config::OutputLanguage;
use crate::{Error, Result};

pub use go::GoRenderer;
pub use rust::RustRenderer;

/// Everything a renderer needs besides the listings
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    /// Package or module name of the generated file
    pub package: &'a str,
    /// Listing file the constants were generated from
    pub source_file: &'a str,
    /// Generation time written into the header
    pub generated_at: DateTime<Utc>,
}

impl RenderContext<'_> {
    /// Header timestamp, RFC 3339 with second precision
    pub fn timestamp(&self) -> String {
        self.generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

/// Renders listings as source code in one target language
pub trait SourceRenderer: Debug + Send + Sync {
    /// Render the complete file
    fn render(&self, context: &RenderContext<'_>, listings: &[ListingRecord]) -> Result<String>;

    /// Destination of the generated file for a package under `root`
    fn output_path(&self, root: &Path, package: &str) -> PathBuf;
}

/// Renderer for the configured output language
pub fn renderer_for(language: OutputLanguage) -> Box<dyn SourceRenderer> {
    match language {
        OutputLanguage::Go => Box::new(GoRenderer),
        OutputLanguage::Rust => Box::new(RustRenderer),
    }
}

/// Check that a normalized symbol can be used as a constant name
///
/// Accepts ASCII letters, digits and underscores, not starting with a digit,
/// containing at least one letter or digit and not equal to a reserved word.
pub fn validate_identifier(package: &str, name: &str, reserved: &[&str]) -> Result<()> {
    let mut chars = name.chars();
    let valid_start = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_');
    let valid_rest = name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    let has_content = name.chars().any(|c| c.is_ascii_alphanumeric());

    if !valid_start || !valid_rest || !has_content {
        return Err(Error::render(
            package,
            format!("'{}' is not a valid constant name", name),
        ));
    }
    if reserved.contains(&name) {
        return Err(Error::render(
            package,
            format!("'{}' is a reserved word", name),
        ));
    }
    Ok(())
}

/// Flatten text onto a single comment line
pub fn comment_text(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect::<String>()
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    /// Fixed context for deterministic output
    pub fn context(package: &str) -> RenderContext<'_> {
        RenderContext {
            package,
            source_file: "nasdaqlisted.txt",
            generated_at: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
        }
    }

    /// Helper to create a normalized listing
    pub fn listing(symbol: &str, normalized: &str, name: &str) -> ListingRecord {
        ListingRecord {
            symbol: symbol.to_string(),
            normalized_symbol: normalized.to_string(),
            security_name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_timestamp_format() {
        assert_eq!(context("nasdaq").timestamp(), "2024-01-02T03:04:05Z");
    }

    #[test]
    fn test_validate_identifier() {
        assert!(validate_identifier("p", "AAPL", &[]).is_ok());
        assert!(validate_identifier("p", "BRK_A", &[]).is_ok());
        assert!(validate_identifier("p", "_X", &[]).is_ok());

        assert!(validate_identifier("p", "", &[]).is_err());
        assert!(validate_identifier("p", "_", &[]).is_err());
        assert!(validate_identifier("p", "1ABC", &[]).is_err());
        assert!(validate_identifier("p", "A*B", &[]).is_err());
        assert!(validate_identifier("p", "A B", &[]).is_err());
        assert!(validate_identifier("p", "Self", &["Self"]).is_err());
    }

    #[test]
    fn test_comment_text_single_line() {
        assert_eq!(comment_text("Alpha Corp "), "Alpha Corp");
        assert_eq!(comment_text("Two\nLines\r"), "Two Lines");
    }

    #[test]
    fn test_renderer_for_language() {
        let root = Path::new("out");
        assert_eq!(
            renderer_for(OutputLanguage::Go).output_path(root, "nasdaq"),
            PathBuf::from("out/nasdaq/nasdaq.go")
        );
        assert_eq!(
            renderer_for(OutputLanguage::Rust).output_path(root, "other"),
            PathBuf::from("out/other/mod.rs")
        );
    }
}
