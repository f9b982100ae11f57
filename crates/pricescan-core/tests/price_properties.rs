//! End-to-end behaviour of the public price extraction API.

use pretty_assertions::assert_eq;
use pricescan_core::{
    contains_price, extract_currency, normalize_price, parse, scan, strip_price_mentions,
    Currency, PriceResult,
};
use rust_decimal::Decimal;
use std::str::FromStr;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn sorted_amounts(text: &str) -> Vec<Decimal> {
    let mut amounts: Vec<Decimal> = scan(text).into_iter().map(|r| r.amount).collect();
    amounts.sort();
    amounts
}

const SAMPLES: [&str; 8] = [
    "Stara cena: 1.019,00 zł, Nowa cena: 799,00 zł",
    "449,00 zł -100,00 zł 349,00 zł",
    "Zaoszczędź 25,00 zł 100,00 zł 75,00 zł",
    "15,00 zł / 50cm 20,00 zł 30,00 zł/mb",
    "Was £49.99 Now £29.99",
    "€99,00 or £85.00",
    "Od 10 zł – 20 zł, dostawa 9,99 zł",
    "Only $19.99 today",
];

#[test]
fn scan_is_idempotent() {
    for text in SAMPLES {
        assert_eq!(scan(text), scan(text));
    }
}

#[test]
fn scanned_amounts_match_their_text() {
    for text in SAMPLES {
        for result in scan(text) {
            assert_eq!(normalize_price(&result.text), Some(result.amount), "{}", text);
        }
    }
}

#[test]
fn scanned_amounts_are_distinct() {
    for text in SAMPLES {
        let mut amounts: Vec<Decimal> = scan(text).into_iter().map(|r| r.amount).collect();
        let total = amounts.len();
        amounts.sort();
        amounts.dedup();
        assert_eq!(amounts.len(), total, "{}", text);
    }
}

#[test]
fn discount_delta_is_excluded() {
    assert_eq!(
        sorted_amounts("449,00 zł -100,00 zł 349,00 zł"),
        vec![dec("349"), dec("449")]
    );
}

#[test]
fn savings_badge_within_tolerance_is_excluded() {
    assert_eq!(
        sorted_amounts("449,00 zł 349,00 zł 99,00 zł"),
        vec![dec("349"), dec("449")]
    );
    assert_eq!(
        sorted_amounts("500,00 zł 300,00 zł 150,00 zł"),
        vec![dec("150"), dec("300"), dec("500")]
    );
}

#[test]
fn range_endpoints_are_excluded() {
    assert_eq!(
        sorted_amounts("Od 10 zł – 20 zł, dostawa 9,99 zł"),
        vec![dec("9.99")]
    );
}

#[test]
fn unit_markers_without_known_unit_keep_prices() {
    assert_eq!(
        sorted_amounts("15,00 zł / 50cm 20,00 zł 30,00 zł/mb"),
        vec![dec("15"), dec("20"), dec("30")]
    );
}

#[test]
fn separators_resolve_per_locale() {
    assert_eq!(normalize_price("1.019,00 zł"), Some(dec("1019.00")));
    assert_eq!(normalize_price("$1,019.00"), Some(dec("1019.00")));
    assert_eq!(normalize_price("12.345,67 zł"), Some(dec("12345.67")));
}

#[test]
fn currencies_resolve_from_markers() {
    assert_eq!(extract_currency("£49.99"), Some(Currency::Gbp));
    assert_eq!(extract_currency("99.00 PLN"), Some(Currency::Pln));
    assert_eq!(extract_currency("just text"), None);
}

#[test]
fn redaction_removes_known_price() {
    assert_eq!(
        strip_price_mentions("Cena: 99,00 zł rabat", &[Some("99,00 zł")]),
        "Cena: rabat"
    );
}

#[test]
fn parse_returns_first_price() {
    assert_eq!(
        parse("£49.99"),
        Some(PriceResult {
            amount: dec("49.99"),
            currency: Some(Currency::Gbp),
            text: "£49.99".to_string(),
        })
    );
    assert_eq!(parse("Was £49.99 now £29.99").map(|r| r.amount), Some(dec("49.99")));
    assert_eq!(parse("No price here"), None);
}

#[test]
fn scan_resolves_currency_per_price() {
    let results = scan("€99,00 or £85.00");
    let currencies: Vec<Option<Currency>> = results.iter().map(|r| r.currency).collect();
    assert_eq!(currencies, vec![Some(Currency::Eur), Some(Currency::Gbp)]);

    let results = scan("Was £49.99 Now £29.99");
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.currency == Some(Currency::Gbp)));
}

#[test]
fn empty_and_priceless_text() {
    assert!(scan("").is_empty());
    assert!(scan("No price here").is_empty());
    assert_eq!(parse(""), None);
    assert!(!contains_price(""));
}

#[test]
fn contains_price_matches_shapes() {
    assert!(contains_price("Only 99,00 zł"));
    assert!(contains_price("Cena: 1 019,00 zł"));
    assert!(contains_price("zł 248,86"));
    assert!(!contains_price("No price here"));
    assert!(!contains_price("DKA2zł"));
}
