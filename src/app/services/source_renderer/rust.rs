//! Rust module renderer

use std::path::{Path, PathBuf};

use super::{RenderContext, SourceRenderer, comment_text, validate_identifier};
use crate::Result;
use crate::app::models::ListingRecord;
use crate::constants::GENERATOR_NAME;

// Keywords that could collide with an all-caps or mixed-case symbol
const RUST_RESERVED: &[&str] = &["Self", "_"];

/// Renders a Rust module with one `&str` constant per listing
#[derive(Debug, Clone, Copy, Default)]
pub struct RustRenderer;

impl SourceRenderer for RustRenderer {
    fn render(&self, context: &RenderContext<'_>, listings: &[ListingRecord]) -> Result<String> {
        let mut out = String::new();
        out.push_str(&format!("//! Code generated by {}; DO NOT EDIT.\n", GENERATOR_NAME));
        out.push_str("//!\n");
        out.push_str(&format!(
            "//! Ticker symbols from `{}`, generated at {}.\n\n",
            context.source_file,
            context.timestamp()
        ));
        out.push_str("#![allow(non_upper_case_globals)]\n");

        for listing in listings {
            validate_identifier(context.package, &listing.normalized_symbol, RUST_RESERVED)?;
            let name = comment_text(&listing.security_name);
            let doc = if name.is_empty() {
                listing.symbol.as_str()
            } else {
                name.as_str()
            };

            out.push('\n');
            out.push_str(&format!("/// {}\n", doc));
            out.push_str(&format!(
                "pub const {}: &str = {:?};\n",
                listing.normalized_symbol, listing.symbol
            ));
        }

        Ok(out)
    }

    fn output_path(&self, root: &Path, package: &str) -> PathBuf {
        root.join(package).join("mod.rs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::source_renderer::tests::{context, listing};

    #[test]
    fn test_renders_module_with_constants() {
        let listings = vec![
            listing("AAA", "AAA", "Alpha Corp "),
            listing("ABC-W", "ABC__W", ""),
        ];

        let text = RustRenderer.render(&context("nasdaq"), &listings).unwrap();

        let expected = "//! Code generated by ticker-symbols; DO NOT EDIT.\n\
                        //!\n\
                        //! Ticker symbols from `nasdaqlisted.txt`, generated at 2024-01-02T03:04:05Z.\n\
                        \n\
                        #![allow(non_upper_case_globals)]\n\
                        \n\
                        /// Alpha Corp\n\
                        pub const AAA: &str = \"AAA\";\n\
                        \n\
                        /// ABC-W\n\
                        pub const ABC__W: &str = \"ABC-W\";\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_symbol_literal_escaped() {
        let listings = vec![listing("Q\"X", "QX", "Quote")];
        let text = RustRenderer.render(&context("other"), &listings).unwrap();

        assert!(text.contains("pub const QX: &str = \"Q\\\"X\";"));
    }

    #[test]
    fn test_reserved_names_rejected() {
        let listings = vec![listing("Self", "Self", "")];
        assert!(RustRenderer.render(&context("other"), &listings).is_err());
    }
}
