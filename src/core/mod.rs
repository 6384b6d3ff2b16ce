//! Core business logic: rate tables, conversion and report formatting

pub mod config;
pub mod convert;
pub mod currency;
pub mod format;
pub mod log;

// Re-export main types for cleaner imports
pub use convert::{ConversionError, ConversionRequest, convert};
pub use currency::{ExchangeRateResponse, RateTable, RateTableError};
pub use format::{format_conversion, format_integer, format_thousands, write_conversion};
