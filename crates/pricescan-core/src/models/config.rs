//! Configuration for the price filter pipeline.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{PriceScanError, Result};

/// Tunables of the price scanner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// Number of characters after a match inspected for a per-unit marker.
    pub per_unit_lookahead: usize,

    /// Minimum number of candidates before the range filter runs.
    pub min_prices_for_range: usize,

    /// Minimum number of distinct prices before the savings filter runs.
    pub min_prices_for_savings: usize,

    /// A savings gap must be at least this fraction of the smallest price.
    pub savings_min_ratio: Decimal,

    /// Absolute floor for the savings gap.
    pub savings_min_diff: Decimal,

    /// Relative tolerance between the smallest price and the gap.
    pub savings_tolerance_ratio: Decimal,

    /// Absolute floor for the tolerance.
    pub savings_tolerance_min: Decimal,

    /// Drop both ends of price ranges ("10 zł – 20 zł").
    pub filter_ranges: bool,

    /// Drop savings badges ("you save 25 zł").
    pub filter_savings: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            per_unit_lookahead: 200,
            min_prices_for_range: 2,
            min_prices_for_savings: 3,
            savings_min_ratio: Decimal::new(1, 1),
            savings_min_diff: Decimal::new(1, 2),
            savings_tolerance_ratio: Decimal::new(2, 2),
            savings_tolerance_min: Decimal::ONE,
            filter_ranges: true,
            filter_savings: true,
        }
    }
}

impl ScannerConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check that every tunable is in range.
    pub fn validate(&self) -> Result<()> {
        if self.per_unit_lookahead == 0 {
            return Err(PriceScanError::Config(
                "per_unit_lookahead must be positive".to_string(),
            ));
        }

        // Both filters compare against neighbours; fewer than two prices is meaningless.
        if self.min_prices_for_range < 2 {
            return Err(PriceScanError::Config(format!(
                "min_prices_for_range must be at least 2, got {}",
                self.min_prices_for_range
            )));
        }
        if self.min_prices_for_savings < 2 {
            return Err(PriceScanError::Config(format!(
                "min_prices_for_savings must be at least 2, got {}",
                self.min_prices_for_savings
            )));
        }

        let ratios = [
            ("savings_min_ratio", self.savings_min_ratio),
            ("savings_min_diff", self.savings_min_diff),
            ("savings_tolerance_ratio", self.savings_tolerance_ratio),
            ("savings_tolerance_min", self.savings_tolerance_min),
        ];
        for (name, value) in ratios {
            if value.is_sign_negative() {
                return Err(PriceScanError::Config(format!(
                    "{} must not be negative, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}
