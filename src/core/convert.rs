use crate::core::currency::RateTable;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq)]
pub enum ConversionError {
    #[error("Currency code not found (from: {from}, to: {to})")]
    CurrencyNotFound { from: String, to: String },
}

/// A single conversion asked for on the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub amount: f64,
    pub from: String,
    pub to: String,
}

/// Converts `amount` from one currency to another. Both rates are relative
/// to the table's base currency, so the amount is normalized to the base
/// first and then scaled to the target. No rounding is applied.
pub fn convert(
    rates: &RateTable,
    from: &str,
    to: &str,
    amount: f64,
) -> Result<f64, ConversionError> {
    let (Some(from_rate), Some(to_rate)) = (rates.get(from), rates.get(to)) else {
        debug!(from, to, "Currency code not found in rate table");
        return Err(ConversionError::CurrencyNotFound {
            from: from.to_string(),
            to: to.to_string(),
        });
    };

    let amount_in_base = amount / from_rate;
    Ok(amount_in_base * to_rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn mock_rates() -> RateTable {
        let rates = HashMap::from([
            ("USD".to_string(), 1.0),
            ("VND".to_string(), 24822.3006),
            ("EUR".to_string(), 0.9142),
        ]);
        RateTable::new("USD", rates).expect("valid rate table")
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= 0.01,
            "Expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_usd_to_vnd() {
        let result = convert(&mock_rates(), "USD", "VND", 100.0).unwrap();
        assert_close(result, 2482230.06);
    }

    #[test]
    fn test_eur_to_vnd() {
        let result = convert(&mock_rates(), "EUR", "VND", 100.0).unwrap();
        assert_close(result, 2715193.68);
        assert_close(result, 100.0 / 0.9142 * 24822.3006);
    }

    #[test]
    fn test_from_base_scales_by_target_rate() {
        let rates = mock_rates();
        for amount in [0.5, 1.0, 42.0, 1_000_000.0] {
            let result = convert(&rates, "USD", "VND", amount).unwrap();
            assert_eq!(result, amount * 24822.3006);
        }
    }

    #[test]
    fn test_same_currency_is_identity() {
        let rates = mock_rates();
        for (code, _) in rates.sorted() {
            for amount in [-12.5, 0.0, 1.0, 100.0, 987654.321] {
                let result = convert(&rates, code, code, amount).unwrap();
                assert!(
                    (result - amount).abs() < 1e-9,
                    "{code}: expected {amount}, got {result}"
                );
            }
        }
    }

    #[test]
    fn test_zero_amount() {
        assert_eq!(convert(&mock_rates(), "EUR", "VND", 0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_negative_amount_keeps_sign() {
        let result = convert(&mock_rates(), "USD", "VND", -100.0).unwrap();
        assert_close(result, -2482230.06);
    }

    #[test]
    fn test_round_trip_differs_only_by_rounding() {
        let rates = mock_rates();
        let there = convert(&rates, "EUR", "VND", 123.45).unwrap();
        let back = convert(&rates, "VND", "EUR", there).unwrap();
        assert!((back - 123.45).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_currencies() {
        let rates = mock_rates();
        let cases = [("bar", "foo"), ("bar", "VND"), ("USD", "foo")];
        for (from, to) in cases {
            let err = convert(&rates, from, to, 100.0).unwrap_err();
            assert_eq!(
                err,
                ConversionError::CurrencyNotFound {
                    from: from.to_string(),
                    to: to.to_string(),
                }
            );
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let result = convert(&mock_rates(), "usd", "VND", 1.0);
        assert!(matches!(result, Err(ConversionError::CurrencyNotFound { .. })));
    }
}
