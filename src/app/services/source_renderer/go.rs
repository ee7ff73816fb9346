//! Go package renderer

use std::path::{Path, PathBuf};

use super::{RenderContext, SourceRenderer, comment_text, validate_identifier};
use crate::Result;
use crate::app::models::ListingRecord;
use crate::constants::GENERATOR_NAME;

const GO_KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
    "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range",
    "return", "select", "struct", "switch", "type", "var",
];

/// Renders a Go file with one untyped string constant per listing
#[derive(Debug, Clone, Copy, Default)]
pub struct GoRenderer;

impl SourceRenderer for GoRenderer {
    fn render(&self, context: &RenderContext<'_>, listings: &[ListingRecord]) -> Result<String> {
        let mut out = String::new();
        out.push_str(&format!("// Code generated by {}; DO NOT EDIT.\n", GENERATOR_NAME));
        out.push_str(&format!("// Generated at {}\n", context.timestamp()));
        out.push_str(&format!("// Source: {}\n\n", context.source_file));
        out.push_str(&format!("package {}\n\n", context.package));
        out.push_str("const (\n");

        for listing in listings {
            validate_identifier(context.package, &listing.normalized_symbol, GO_KEYWORDS)?;
            out.push_str(&format!(
                "\t// {}\n",
                comment_text(&format!(
                    "{} {}",
                    listing.normalized_symbol, listing.security_name
                ))
            ));
            out.push_str(&format!(
                "\t{} = {}\n",
                listing.normalized_symbol,
                go_string_literal(&listing.symbol)
            ));
        }

        out.push_str(")\n");
        Ok(out)
    }

    fn output_path(&self, root: &Path, package: &str) -> PathBuf {
        root.join(package).join(format!("{}.go", package))
    }
}

/// Interpreted Go string literal
fn go_string_literal(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('"');
    for c in value.chars() {
        match c {
            '"' => literal.push_str("\\\""),
            '\\' => literal.push_str("\\\\"),
            '\n' => literal.push_str("\\n"),
            '\t' => literal.push_str("\\t"),
            c if c.is_control() => literal.push_str(&format!("\\u{:04x}", c as u32)),
            c => literal.push(c),
        }
    }
    literal.push('"');
    literal
}
