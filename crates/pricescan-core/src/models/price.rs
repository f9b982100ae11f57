//! Price data models shared by the scanner and its callers.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Currency recognised in a price mention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// Polish złoty (zł, PLN).
    #[serde(rename = "PLN")]
    Pln,
    /// Euro (€, EUR).
    #[serde(rename = "EUR")]
    Eur,
    /// US dollar ($, USD).
    #[serde(rename = "USD")]
    Usd,
    /// British pound (£, GBP).
    #[serde(rename = "GBP")]
    Gbp,
}

impl Currency {
    /// Map a currency marker (symbol or code, any case) to its currency.
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker.to_lowercase().as_str() {
            "zł" | "zl" | "pln" => Some(Self::Pln),
            "€" | "eur" => Some(Self::Eur),
            "$" | "usd" => Some(Self::Usd),
            "£" | "gbp" => Some(Self::Gbp),
            _ => None,
        }
    }

    /// ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Pln => "PLN",
            Self::Eur => "EUR",
            Self::Usd => "USD",
            Self::Gbp => "GBP",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A price-like match that passed normalization and per-candidate admission.
///
/// Candidates are never mutated once built; filters only decide which of
/// them survive.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceCandidate {
    /// Matched text with whitespace runs collapsed and trimmed.
    pub text: String,
    /// Normalized amount.
    pub value: Decimal,
    /// Byte offset of the match start in the source text.
    pub start: usize,
    /// Byte offset just past the match end in the source text.
    pub end: usize,
}

/// A price extracted from text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceResult {
    /// Normalized amount.
    pub amount: Decimal,

    /// Currency found in the matched text, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,

    /// The matched text.
    pub text: String,
}
