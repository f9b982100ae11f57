//! Error types for the pricescan-core library.
//!
//! Price extraction itself never fails: an unmatched or unparseable price is
//! reported as `None` or an empty list. Errors only surface from building
//! redaction patterns and from loading or saving configuration.

use thiserror::Error;

/// Main error type for the pricescan library.
#[derive(Error, Debug)]
pub enum PriceScanError {
    /// A redaction pattern could not be compiled.
    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Configuration values are out of range.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error while reading or writing configuration.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the pricescan library.
pub type Result<T> = std::result::Result<T, PriceScanError>;
