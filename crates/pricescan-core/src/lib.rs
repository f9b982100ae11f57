//! Core library for multi-locale price extraction.
//!
//! This crate provides:
//! - Price scanning over free text (Polish, European and Anglo-American formats)
//! - False-positive filtering (unit prices, ranges, discount deltas, savings badges)
//! - Amount normalization and currency detection
//! - Redaction of known price mentions
//! - Cookie/GDPR consent banner classification over an abstract node model
//!
//! ```
//! use pricescan_core::{parse, Currency};
//!
//! let price = parse("Cena: 1.019,00 zł").unwrap();
//! assert_eq!(price.currency, Some(Currency::Pln));
//! assert_eq!(price.text, "1.019,00 zł");
//! ```

pub mod consent;
pub mod error;
pub mod models;
pub mod scanner;

pub use consent::{is_consent_node, ConsentDetector, ConsentNode};
pub use error::{PriceScanError, Result};
pub use models::config::ScannerConfig;
pub use models::price::{Currency, PriceCandidate, PriceResult};
pub use scanner::{
    build_redaction_pattern, extract_currency, normalize_price, strip_price_mentions,
    FieldExtractor, PriceDetector,
};

/// First accepted price in `text`.
pub fn parse(text: &str) -> Option<PriceResult> {
    PriceDetector::new().parse(text)
}

/// All accepted prices in `text`, in order of appearance.
pub fn scan(text: &str) -> Vec<PriceResult> {
    PriceDetector::new().scan(text)
}

/// Whether `text` contains a price-shaped substring. No filtering is applied.
pub fn contains_price(text: &str) -> bool {
    PriceDetector::new().contains_price(text)
}
