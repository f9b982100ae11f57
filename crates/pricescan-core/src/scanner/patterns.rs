//! Regex tables for price scanning.
//!
//! The `regex` crate has no lookaround, so letter/digit boundaries around a
//! match are checked by the candidate scanner instead of being encoded here.
//! The three price shapes are kept as separate patterns, anchored at the
//! start, so the scanner can try them in priority order at each position.

use lazy_static::lazy_static;
use regex::Regex;

/// Integer part: grouped thousands (`1.019`, `1 019`) or up to four bare digits.
macro_rules! price_number {
    () => {
        r"(?:[0-9]{1,3}(?:[.\s\u{00a0}][0-9]{3})+|[0-9]{1,4})"
    };
}

lazy_static! {
    // Currency first: "zł 248,86", "€1 234", "$19.9"
    pub static ref PREFIX_PRICE: Regex = Regex::new(concat!(
        r"(?i)\A(?:zł|pln|€|\$|£)[\s\u{00a0}]*",
        price_number!(),
        r"(?:[.,][0-9]{1,2})?"
    )).unwrap();

    // Two decimals then currency symbol or code: "1.019,00 zł", "49.99 EUR"
    pub static ref DECIMAL_SUFFIX_PRICE: Regex = Regex::new(concat!(
        r"(?i)\A",
        price_number!(),
        r"[.,][0-9]{2}[\s\u{00a0}]*(?:zł|pln|€|\$|£|eur|usd|gbp)"
    )).unwrap();

    // Whole amount then currency symbol: "25 zł", "1 234€"
    pub static ref SYMBOL_SUFFIX_PRICE: Regex = Regex::new(concat!(
        r"(?i)\A",
        price_number!(),
        r"[\s\u{00a0}]*(?:zł|pln|€|\$|£)"
    )).unwrap();

    // "/ kg", "za szt" right after a price
    pub static ref PER_UNIT_ANCHOR: Regex = Regex::new(
        r"(?i)\A(?:/\s*|za\s+)(?:kg|g|mg|l|ml|szt|m[²³23]?|cm|mm|op|opak|pcs|pc|unit|each|ea|kaps|tabl|tab)\b"
    ).unwrap();

    // En/em dash with optional spacing, or a hyphen with spaces on both sides
    pub static ref RANGE_SEPARATOR: Regex = Regex::new(
        r"\s*[–—]\s*|\s+-\s+"
    ).unwrap();

    pub static ref CURRENCY_MARKER: Regex = Regex::new(
        r"(?i)(pln|usd|eur|gbp|zł|zl|€|\$|£)"
    ).unwrap();

    pub static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();

    pub static ref MULTIPLE_SPACES: Regex = Regex::new(r"\s{2,}").unwrap();
}

/// Currency marker alternation appended to redaction patterns.
pub const CURRENCY_SUFFIX: &str = r"(?:zł|zl|pln|€|eur|\$|usd|£|gbp)";

/// Characters preceding a match that mark it as a discount delta.
pub const NEGATIVE_PREFIXES: [char; 2] = ['-', '\u{2212}'];
