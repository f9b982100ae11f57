//! Price scanning: candidate matching, false-positive filters and normalization.

pub mod candidates;
pub mod detector;
pub mod filters;
pub mod normalize;
pub mod patterns;
pub mod redact;

pub use detector::PriceDetector;
pub use normalize::{extract_currency, normalize_price};
pub use redact::{build_redaction_pattern, strip_price_mentions};

/// Extractor of values from free text; `PriceDetector` yields prices.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// First accepted value in the text, e.g. the first accepted price.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Every accepted value, in text order.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}
