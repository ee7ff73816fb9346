//! Symbol and security name cleaning primitives

use crate::constants::SYMBOL_SUBSTITUTIONS;

/// Replace punctuation in a ticker symbol with underscore runs
///
/// `.` becomes one underscore, `-` two, `+` three, `$` four, `=` five, `^`
/// six and `#` seven. Every other character is kept. The result contains none
/// of the substituted characters, so applying the function twice gives the
/// same result as applying it once.
pub fn normalize_symbol(symbol: &str) -> String {
    let mut normalized = String::with_capacity(symbol.len());
    for c in symbol.chars() {
        match SYMBOL_SUBSTITUTIONS.iter().find(|(from, _)| *from == c) {
            Some((_, replacement)) => normalized.push_str(replacement),
            None => normalized.push(c),
        }
    }
    normalized
}

/// Shorten a security name for use in a generated comment
///
/// The name is cut at its first hyphen (the part after it is usually the
/// security type, e.g. "Common Stock") and then limited to `max_chars`
/// characters. Trailing whitespace left by the cut is kept.
pub fn truncate_security_name(name: &str, max_chars: usize) -> String {
    let base = match name.split_once('-') {
        Some((before, _)) => before,
        None => name,
    };

    match base.char_indices().nth(max_chars) {
        Some((byte_index, _)) => base[..byte_index].to_string(),
        None => base.to_string(),
    }
}

/// Whether a symbol contains any character the normalizer would replace
pub fn needs_normalization(symbol: &str) -> bool {
    symbol
        .chars()
        .any(|c| SYMBOL_SUBSTITUTIONS.iter().any(|(from, _)| *from == c))
}
