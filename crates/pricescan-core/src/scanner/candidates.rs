//! Candidate scanning and per-candidate admission.

use regex::Regex;
use tracing::trace;

use crate::models::price::PriceCandidate;

use super::normalize::normalize_price;
use super::patterns::{
    DECIMAL_SUFFIX_PRICE, NEGATIVE_PREFIXES, PER_UNIT_ANCHOR, PREFIX_PRICE,
    SYMBOL_SUFFIX_PRICE, WHITESPACE_RUN,
};

/// Which side of a match must not touch a letter or digit.
#[derive(Clone, Copy)]
struct Boundary {
    no_letter_before: bool,
    no_digit_after: bool,
}

/// The three price shapes, in the order they are tried at each position.
fn price_shapes() -> [(&'static Regex, Boundary); 3] {
    let open = Boundary {
        no_letter_before: false,
        no_digit_after: false,
    };
    let fenced = Boundary {
        no_letter_before: true,
        no_digit_after: true,
    };
    [
        (&*PREFIX_PRICE, open),
        (&*DECIMAL_SUFFIX_PRICE, fenced),
        (&*SYMBOL_SUFFIX_PRICE, fenced),
    ]
}

/// A price can only start on a digit or the first character of a currency marker.
fn can_start_price(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, 'z' | 'Z' | 'p' | 'P' | '€' | '$' | '£')
}

/// Try every shape at `start`; returns the end offset of the first that fits.
fn match_at(text: &str, start: usize) -> Option<usize> {
    let rest = &text[start..];
    let before = text[..start].chars().next_back();

    for (pattern, boundary) in price_shapes() {
        let Some(m) = pattern.find(rest) else {
            continue;
        };
        let end = start + m.end();

        if boundary.no_letter_before && before.is_some_and(|c| c.is_ascii_alphabetic()) {
            continue;
        }
        if boundary.no_digit_after && text[end..].starts_with(|c: char| c.is_ascii_digit()) {
            continue;
        }

        return Some(end);
    }

    None
}

/// Non-overlapping price-like spans, left to right, as byte ranges.
///
/// Offsets come straight from the matcher. A span rejected at one position is
/// never re-found there by searching for its text later, so "x5 zł -5 zł"
/// yields only the "5 zł" after the minus sign (and admission then drops it).
pub fn find_price_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut resume = 0;

    for (idx, c) in text.char_indices() {
        if idx < resume || !can_start_price(c) {
            continue;
        }
        if let Some(end) = match_at(text, idx) {
            spans.push((idx, end));
            resume = end;
        }
    }

    spans
}

/// Whether `text` contains anything shaped like a price.
pub fn has_price_span(text: &str) -> bool {
    text.char_indices()
        .any(|(idx, c)| can_start_price(c) && match_at(text, idx).is_some())
}

/// Scan `text` and keep the matches that normalize and stand alone as prices.
///
/// Matches preceded by a minus sign are discount deltas; matches directly
/// followed by "/ kg", "za szt" and similar are unit prices.
pub fn scan_candidates(text: &str, per_unit_lookahead: usize) -> Vec<PriceCandidate> {
    find_price_spans(text)
        .into_iter()
        .filter_map(|(start, end)| admit(text, start, end, per_unit_lookahead))
        .collect()
}

fn admit(text: &str, start: usize, end: usize, lookahead: usize) -> Option<PriceCandidate> {
    let raw = &text[start..end];

    let Some(value) = normalize_price(raw) else {
        trace!("Rejected {:?}: not a number", raw);
        return None;
    };

    if is_negative(text, start) {
        trace!("Rejected {:?}: negative prefix", raw);
        return None;
    }

    if is_per_unit(text, end, lookahead) {
        trace!("Rejected {:?}: per-unit price", raw);
        return None;
    }

    Some(PriceCandidate {
        text: WHITESPACE_RUN.replace_all(raw, " ").trim().to_string(),
        value,
        start,
        end,
    })
}

fn is_negative(text: &str, start: usize) -> bool {
    text[..start]
        .chars()
        .next_back()
        .is_some_and(|c| NEGATIVE_PREFIXES.contains(&c))
}

fn is_per_unit(text: &str, end: usize, lookahead: usize) -> bool {
    let after: String = text[end..].chars().take(lookahead).collect();
    let after = WHITESPACE_RUN.replace_all(&after, " ");
    PER_UNIT_ANCHOR.is_match(after.trim_start())
}
