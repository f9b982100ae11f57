//! Removal of known price mentions from surrounding text.

use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{trace, warn};

use crate::error::Result;

use super::normalize::normalize_price;
use super::patterns::{CURRENCY_SUFFIX, MULTIPLE_SPACES};

/// Build a pattern matching any rendering of `value` with two decimals.
///
/// Thousands groups may be separated by an optional space or NBSP, the decimal
/// separator may be `.` or `,`, and a currency marker may follow. For 1299 the
/// pattern matches "1299,00 zł", "1 299.00" and "1 299,00 PLN".
pub fn build_redaction_pattern(value: Decimal) -> Result<Regex> {
    let (integer, fraction) = split_price_parts(value);
    let groups = thousands_groups(&integer).join(r"[\s\u{00a0}]?");
    let pattern = format!(r"(?i){}[.,]{}\s?{}?", groups, fraction, CURRENCY_SUFFIX);
    Ok(Regex::new(&pattern)?)
}

/// Strip every mention of the given prices from `text`.
///
/// Each price is removed verbatim, with its spaces removed, and through its
/// redaction pattern. Blank and absent entries are skipped. Whitespace runs
/// left behind collapse to a single space.
pub fn strip_price_mentions<S: AsRef<str>>(text: &str, prices: &[Option<S>]) -> String {
    let mut cleaned = text.replace('\u{00a0}', " ");

    for price in prices.iter().flatten() {
        let normalized = price.as_ref().replace('\u{00a0}', " ");
        let normalized = normalized.trim();
        if normalized.is_empty() {
            continue;
        }

        cleaned = cleaned.replace(normalized, "");
        cleaned = cleaned.replace(&normalized.replace(' ', ""), "");

        let Some(value) = normalize_price(normalized) else {
            continue;
        };

        match build_redaction_pattern(value) {
            Ok(pattern) => {
                trace!("Redacting {} with pattern {}", normalized, pattern.as_str());
                cleaned = pattern.replace_all(&cleaned, "").into_owned();
            }
            Err(e) => warn!("Skipping redaction of {}: {}", normalized, e),
        }
    }

    MULTIPLE_SPACES.replace_all(&cleaned, " ").trim().to_string()
}

/// Format with two decimals and split into integer and fraction digits.
fn split_price_parts(value: Decimal) -> (String, String) {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    let formatted = format!("{:.2}", rounded);

    match formatted.split_once('.') {
        Some((integer, fraction)) => (integer.to_string(), fraction.to_string()),
        None => (formatted, "00".to_string()),
    }
}

/// Right-aligned chunks of at most three digits: "1234567" -> ["1", "234", "567"].
fn thousands_groups(integer: &str) -> Vec<&str> {
    let head = integer.len() % 3;
    let mut groups = Vec::with_capacity(integer.len() / 3 + 1);
    if head > 0 {
        groups.push(&integer[..head]);
    }
    let mut start = head;
    while start < integer.len() {
        groups.push(&integer[start..start + 3]);
        start += 3;
    }
    groups
}
