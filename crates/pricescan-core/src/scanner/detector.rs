//! Price detector composing scanning, admission and filtering.

use tracing::debug;

use crate::models::config::ScannerConfig;
use crate::models::price::{PriceCandidate, PriceResult};

use super::FieldExtractor;
use super::candidates::{has_price_span, scan_candidates};
use super::filters::{dedup_by_value, filter_ranges, filter_savings};
use super::normalize::extract_currency;

/// Extracts standalone prices from free text.
#[derive(Debug, Clone, Default)]
pub struct PriceDetector {
    config: ScannerConfig,
}

impl PriceDetector {
    /// Create a detector with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detector with custom settings.
    pub fn with_config(config: ScannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// Candidates surviving every filter, in text order.
    pub fn candidates(&self, text: &str) -> Vec<PriceCandidate> {
        let admitted = scan_candidates(text, self.config.per_unit_lookahead);
        let scanned = admitted.len();

        let ranged = if self.config.filter_ranges {
            filter_ranges(admitted, text, &self.config)
        } else {
            admitted
        };
        let unique = dedup_by_value(ranged);
        let accepted = if self.config.filter_savings {
            filter_savings(unique, &self.config)
        } else {
            unique
        };

        debug!("Accepted {} of {} price candidates", accepted.len(), scanned);
        accepted
    }

    /// First accepted price, if any.
    pub fn parse(&self, text: &str) -> Option<PriceResult> {
        self.candidates(text).into_iter().next().map(to_result)
    }

    /// All accepted prices, each with its own currency.
    pub fn scan(&self, text: &str) -> Vec<PriceResult> {
        self.candidates(text).into_iter().map(to_result).collect()
    }

    /// Cheap check for a price-shaped substring; applies no filters.
    pub fn contains_price(&self, text: &str) -> bool {
        has_price_span(text)
    }
}

impl FieldExtractor for PriceDetector {
    type Output = PriceResult;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.parse(text)
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        self.scan(text)
    }
}

fn to_result(candidate: PriceCandidate) -> PriceResult {
    PriceResult {
        amount: candidate.value,
        currency: extract_currency(&candidate.text),
        text: candidate.text,
    }
}
