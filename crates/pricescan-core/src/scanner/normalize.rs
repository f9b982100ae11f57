//! Amount normalization and currency detection for raw price strings.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::price::Currency;

use super::patterns::CURRENCY_MARKER;

const NBSP: char = '\u{00a0}';

/// Parse a price string in any supported locale format into an amount.
///
/// Handles "1.019,00 zł", "1 019,00", "$1,019.00" and "12,345.67". Returns
/// `None` when nothing numeric is left, the separators do not resolve to a
/// single decimal point, the decimal point has no digits after it ("5.",
/// "1,"), or the amount needs more than 28 significant digits.
pub fn normalize_price(raw: &str) -> Option<Decimal> {
    let text = raw.replace(NBSP, " ");
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.' || c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }

    let resolved: String = resolve_separators(&cleaned)
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    if resolved.ends_with('.') {
        return None;
    }

    Decimal::from_str(&resolved).ok()
}

/// Decide which of `,` and `.` is the decimal point and drop the other.
fn resolve_separators(cleaned: &str) -> String {
    let comma_count = cleaned.matches(',').count();
    let has_dot = cleaned.contains('.');

    match (comma_count, has_dot) {
        (0, _) => cleaned.to_string(),
        (_, true) => {
            let comma_pos = cleaned.rfind(',');
            let dot_pos = cleaned.rfind('.');
            if comma_pos > dot_pos {
                cleaned.replace('.', "").replace(',', ".")
            } else {
                cleaned.replace(',', "")
            }
        }
        (1, false) => cleaned.replace(',', "."),
        (_, false) => {
            // All but the last comma group thousands
            match cleaned.rsplit_once(',') {
                Some((integer, fraction)) => format!("{}.{}", integer.replace(',', ""), fraction),
                None => cleaned.to_string(),
            }
        }
    }
}

/// Find the first currency marker in `raw` and map it to its currency.
pub fn extract_currency(raw: &str) -> Option<Currency> {
    if raw.is_empty() {
        return None;
    }

    CURRENCY_MARKER
        .find(raw)
        .and_then(|m| Currency::from_marker(m.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_normalize_polish_formats() {
        assert_eq!(normalize_price("99,00 zł"), Some(dec("99.00")));
        assert_eq!(normalize_price("1.019,00 zł"), Some(dec("1019.00")));
        assert_eq!(normalize_price("1 019,00 zł"), Some(dec("1019.00")));
        assert_eq!(normalize_price("1\u{00a0}019,00\u{00a0}zł"), Some(dec("1019.00")));
        assert_eq!(normalize_price("12.345,67 zł"), Some(dec("12345.67")));
    }

    #[test]
    fn test_normalize_english_formats() {
        assert_eq!(normalize_price("$1,019.00"), Some(dec("1019.00")));
        assert_eq!(normalize_price("$12,345.67"), Some(dec("12345.67")));
        assert_eq!(normalize_price("£49.99"), Some(dec("49.99")));
        assert_eq!(normalize_price("€1 234"), Some(dec("1234")));
    }

    #[test]
    fn test_normalize_multiple_commas() {
        assert_eq!(normalize_price("1,234,56"), Some(dec("1234.56")));
    }

    #[test]
    fn test_normalize_failures() {
        assert_eq!(normalize_price(""), None);
        assert_eq!(normalize_price("   "), None);
        assert_eq!(normalize_price("zł"), None);
        assert_eq!(normalize_price("1.2.3"), None);
    }

    #[test]
    fn test_normalize_rejects_dangling_separator() {
        assert_eq!(normalize_price("5."), None);
        assert_eq!(normalize_price("1, zł"), None);
        assert_eq!(normalize_price("5.0"), Some(dec("5.0")));
    }

    #[test]
    fn test_normalize_overflow_is_none() {
        let huge = format!("{},00 zł", "1 000".repeat(10));
        assert_eq!(normalize_price(&huge), None);
    }

    #[test]
    fn test_extract_currency() {
        assert_eq!(extract_currency("99,00 zł"), Some(Currency::Pln));
        assert_eq!(extract_currency("99.00 PLN"), Some(Currency::Pln));
        assert_eq!(extract_currency("12 zl"), Some(Currency::Pln));
        assert_eq!(extract_currency("£49.99"), Some(Currency::Gbp));
        assert_eq!(extract_currency("€19.99"), Some(Currency::Eur));
        assert_eq!(extract_currency("$29.99"), Some(Currency::Usd));
        assert_eq!(extract_currency("19.99 eur"), Some(Currency::Eur));
    }

    #[test]
    fn test_extract_currency_none() {
        assert_eq!(extract_currency("just text"), None);
        assert_eq!(extract_currency(""), None);
    }

    #[test]
    fn test_extract_currency_first_marker_wins() {
        assert_eq!(extract_currency("€99,00 or £85.00"), Some(Currency::Eur));
    }
}
