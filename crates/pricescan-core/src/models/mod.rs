//! Data models for extracted prices and scanner configuration.

pub mod config;
pub mod price;

pub use config::ScannerConfig;
pub use price::{Currency, PriceCandidate, PriceResult};
