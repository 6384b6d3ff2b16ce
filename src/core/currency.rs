//! Exchange rate tables loaded from an exchangerate-api style response.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

pub const BASE_CURRENCY: &str = "USD";

#[derive(Debug, Error, PartialEq)]
pub enum RateTableError {
    #[error("Rate provider reported '{0}' instead of success")]
    UnsuccessfulResponse(String),

    #[error("Invalid rate for {code}: {rate} (rates must be positive and finite)")]
    InvalidRate { code: String, rate: f64 },

    #[error("Base currency {code} must have a rate of 1.0, found {rate}")]
    BaseRateMismatch { code: String, rate: f64 },
}

/// Raw shape of the rate file. Only `conversion_rates` is required.
#[derive(Debug, Deserialize, Clone)]
pub struct ExchangeRateResponse {
    pub result: Option<String>,
    pub documentation: Option<String>,
    pub terms_of_use: Option<String>,
    pub time_last_update_unix: Option<i64>,
    pub time_last_update_utc: Option<String>,
    pub time_next_update_unix: Option<i64>,
    pub time_next_update_utc: Option<String>,
    pub base_code: Option<String>,
    pub conversion_rates: HashMap<String, f64>,
}

/// Rates keyed by currency code, each expressing how many units of that
/// currency equal one unit of the base currency.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    base: String,
    rates: HashMap<String, f64>,
    last_updated: Option<DateTime<Utc>>,
}

impl RateTable {
    pub fn new(
        base: impl Into<String>,
        rates: HashMap<String, f64>,
    ) -> Result<Self, RateTableError> {
        let base = base.into();

        for (code, rate) in &rates {
            if !rate.is_finite() || *rate <= 0.0 {
                return Err(RateTableError::InvalidRate {
                    code: code.clone(),
                    rate: *rate,
                });
            }
        }

        if let Some(rate) = rates.get(&base) {
            if *rate != 1.0 {
                return Err(RateTableError::BaseRateMismatch {
                    code: base,
                    rate: *rate,
                });
            }
        }

        Ok(Self {
            base,
            rates,
            last_updated: None,
        })
    }

    pub fn from_response(response: ExchangeRateResponse) -> Result<Self, RateTableError> {
        if let Some(result) = response.result.as_deref() {
            if result != "success" {
                return Err(RateTableError::UnsuccessfulResponse(result.to_string()));
            }
        }

        let base = response
            .base_code
            .unwrap_or_else(|| BASE_CURRENCY.to_string());
        let mut table = Self::new(base, response.conversion_rates)?;
        table.last_updated = response
            .time_last_update_unix
            .and_then(|ts| DateTime::from_timestamp(ts, 0));
        Ok(table)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let response: ExchangeRateResponse =
            serde_json::from_str(json).context("Failed to parse exchange rate response")?;
        Ok(Self::from_response(response)?)
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading rate table");

        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read rate file: {}", path.display()))?;
        let table = Self::from_json(&json)
            .with_context(|| format!("Invalid rate file: {}", path.display()))?;

        debug!(base = %table.base, count = table.len(), "Loaded rate table");
        Ok(table)
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn get(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }

    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Entries ordered by currency code.
    pub fn sorted(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<(&str, f64)> = self
            .rates
            .iter()
            .map(|(code, rate)| (code.as_str(), *rate))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}
