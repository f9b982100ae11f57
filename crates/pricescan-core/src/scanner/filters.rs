//! False-positive filters over admitted price candidates.
//!
//! Each filter takes the candidates by value and returns the survivors in
//! their original order.

use std::collections::{BTreeSet, HashSet};

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::config::ScannerConfig;
use crate::models::price::PriceCandidate;

use super::patterns::RANGE_SEPARATOR;

/// Drop both ends of every "10 zł – 20 zł" style range.
///
/// Only adjacent candidates are compared. Removal is by index so equal
/// amounts elsewhere in the text are unaffected.
pub fn filter_ranges(
    candidates: Vec<PriceCandidate>,
    text: &str,
    config: &ScannerConfig,
) -> Vec<PriceCandidate> {
    if candidates.len() < config.min_prices_for_range {
        return candidates;
    }

    let mut in_range = BTreeSet::new();
    for (idx, pair) in candidates.windows(2).enumerate() {
        if range_between(&pair[0], &pair[1], text) {
            in_range.insert(idx);
            in_range.insert(idx + 1);
        }
    }

    if !in_range.is_empty() {
        debug!("Dropping {} range endpoints", in_range.len());
    }

    candidates
        .into_iter()
        .enumerate()
        .filter(|(idx, _)| !in_range.contains(idx))
        .map(|(_, candidate)| candidate)
        .collect()
}

fn range_between(current: &PriceCandidate, next: &PriceCandidate, text: &str) -> bool {
    if next.start <= current.end {
        return false;
    }
    RANGE_SEPARATOR.is_match(&text[current.end..next.start])
}

/// Keep the first candidate for each distinct amount.
pub fn dedup_by_value(candidates: Vec<PriceCandidate>) -> Vec<PriceCandidate> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|candidate| seen.insert(candidate.value.normalize()))
        .collect()
}

/// Drop the smallest amount when it looks like a "you save" badge.
///
/// A badge is the gap between two other prices on the page: with 449 and 349
/// present, a standalone 100 (or 99, within tolerance) is not a price.
pub fn filter_savings(
    candidates: Vec<PriceCandidate>,
    config: &ScannerConfig,
) -> Vec<PriceCandidate> {
    if candidates.len() < config.min_prices_for_savings {
        return candidates;
    }

    let Some(min_value) = candidates.iter().map(|c| c.value).min() else {
        return candidates;
    };

    if !has_savings_amount(&candidates, min_value, config) {
        return candidates;
    }

    debug!("Dropping savings badge {}", min_value);
    candidates
        .into_iter()
        .filter(|candidate| candidate.value != min_value)
        .collect()
}

fn has_savings_amount(
    candidates: &[PriceCandidate],
    min_value: Decimal,
    config: &ScannerConfig,
) -> bool {
    let others: Vec<Decimal> = candidates
        .iter()
        .map(|c| c.value)
        .filter(|value| *value != min_value)
        .collect();

    others.iter().enumerate().any(|(i, first)| {
        others[i + 1..]
            .iter()
            .any(|second| matches_savings((*first - *second).abs(), min_value, config))
    })
}

fn matches_savings(diff: Decimal, min_value: Decimal, config: &ScannerConfig) -> bool {
    let min_diff = (min_value * config.savings_min_ratio).max(config.savings_min_diff);
    if diff < min_diff {
        return false;
    }

    let tolerance = (min_value * config.savings_tolerance_ratio).max(config.savings_tolerance_min);
    (min_value - diff).abs() <= tolerance
}
